use proptest::prelude::*;
use slr_dash::callbacks::{success_payload_scatter_chart, success_pie_chart};
use slr_dash::LaunchContext;
use slr_launch::{LaunchRecord, PayloadRange, SiteSelection, LAUNCH_CSV, LAUNCH_SITES};
use std::collections::BTreeSet;

fn records() -> Vec<LaunchRecord> {
    LaunchRecord::parse_launch_csv(LAUNCH_CSV).expect("embedded dataset parses")
}

fn site_strategy() -> impl Strategy<Value = SiteSelection> {
    prop_oneof![
        Just(SiteSelection::All),
        proptest::sample::select(LAUNCH_SITES.to_vec())
            .prop_map(|site| SiteSelection::from_value(site)),
    ]
}

#[test]
fn all_sites_pie_has_one_slice_per_site_with_class_sums() {
    let ctx = LaunchContext::embedded().unwrap();
    let pie = success_pie_chart(&ctx, &SiteSelection::All).unwrap();

    let records = records();
    let sites: BTreeSet<&str> = records.iter().map(|r| r.launch_site.as_str()).collect();
    assert_eq!(pie.slices.len(), sites.len());

    for slice in &pie.slices {
        let expected: u32 = records
            .iter()
            .filter(|r| r.launch_site == slice.label)
            .map(|r| r.class as u32)
            .sum();
        assert_eq!(slice.value, expected as f64, "site {}", slice.label);
    }
    let flat: Vec<(&str, f64)> = pie.slices.iter().map(|s| (s.label.as_str(), s.value)).collect();
    assert_eq!(
        flat,
        vec![
            ("CCAFS LC-40", 7.0),
            ("VAFB SLC-4E", 4.0),
            ("KSC LC-39A", 10.0),
            ("CCAFS SLC-40", 3.0),
        ]
    );
}

#[test]
fn ksc_pie_counts_successes_and_failures() {
    let ctx = LaunchContext::embedded().unwrap();
    let pie = success_pie_chart(&ctx, &SiteSelection::from_value("KSC LC-39A")).unwrap();
    let flat: Vec<(&str, f64)> = pie.slices.iter().map(|s| (s.label.as_str(), s.value)).collect();
    assert_eq!(flat, vec![("1", 10.0), ("0", 3.0)]);
}

#[test]
fn ksc_full_range_scatter_is_exactly_the_ksc_rows() {
    let ctx = LaunchContext::embedded().unwrap();
    let range = PayloadRange::new(0.0, 10000.0).unwrap();
    let scatter = success_payload_scatter_chart(
        &ctx,
        &SiteSelection::from_value("KSC LC-39A"),
        &range,
    )
    .unwrap();

    let expected: Vec<(f64, f64, String)> = records()
        .into_iter()
        .filter(|r| r.launch_site == "KSC LC-39A")
        .map(|r| (r.payload_mass_kg, r.class as f64, r.booster_version_category))
        .collect();
    let actual: Vec<(f64, f64, String)> = scatter
        .points
        .iter()
        .map(|p| (p.x, p.y, p.color.clone()))
        .collect();
    assert_eq!(actual.len(), 13);
    assert_eq!(actual, expected);
}

#[test]
fn zero_range_scatter_only_holds_zero_payloads() {
    let ctx = LaunchContext::embedded().unwrap();
    let range = PayloadRange::new(0.0, 0.0).unwrap();
    let all = success_payload_scatter_chart(&ctx, &SiteSelection::All, &range).unwrap();
    // Flights 1 and 2 carried no payload
    assert_eq!(all.points.len(), 2);

    let ksc = success_payload_scatter_chart(&ctx, &SiteSelection::from_value("KSC LC-39A"), &range)
        .unwrap();
    assert!(ksc.is_empty());
}

proptest! {
    #[test]
    fn scatter_points_respect_range_and_site(
        site in site_strategy(),
        a in 0u32..=100,
        b in 0u32..=100
    ) {
        let ctx = LaunchContext::embedded().unwrap();
        let (low, high) = (a.min(b) as f64 * 100.0, a.max(b) as f64 * 100.0);
        let range = PayloadRange::new(low, high).unwrap();
        let scatter = success_payload_scatter_chart(&ctx, &site, &range).unwrap();

        for point in &scatter.points {
            prop_assert!(low <= point.x && point.x <= high);
            prop_assert!(site.matches(&point.launch_site));
        }
        let expected = records()
            .iter()
            .filter(|r| site.matches(&r.launch_site) && range.contains(r.payload_mass_kg))
            .count();
        prop_assert_eq!(scatter.points.len(), expected);
    }

    #[test]
    fn pie_slices_cover_only_the_selected_site(site in site_strategy()) {
        let ctx = LaunchContext::embedded().unwrap();
        let pie = success_pie_chart(&ctx, &site).unwrap();
        match site.site() {
            None => {
                let records = records();
                let sites: BTreeSet<&str> = records.iter().map(|r| r.launch_site.as_str()).collect();
                prop_assert_eq!(pie.slices.len(), sites.len());
            }
            Some(launch_site) => {
                let records = records();
                let site_records: Vec<&LaunchRecord> = records
                    .iter()
                    .filter(|r| r.launch_site == launch_site)
                    .collect();
                let classes: BTreeSet<String> =
                    site_records.iter().map(|r| r.class.to_string()).collect();
                let labels: BTreeSet<String> = pie.slices.iter().map(|s| s.label.clone()).collect();
                prop_assert_eq!(pie.slices.len(), classes.len());
                prop_assert_eq!(labels, classes);
                prop_assert_eq!(pie.total() as usize, site_records.len());
            }
        }
    }

    #[test]
    fn repeated_calls_select_the_same_data(site in site_strategy(), high in 0u32..=100) {
        let ctx = LaunchContext::embedded().unwrap();
        let range = PayloadRange::new(0.0, high as f64 * 100.0).unwrap();
        prop_assert_eq!(
            success_pie_chart(&ctx, &site).unwrap(),
            success_pie_chart(&ctx, &site).unwrap()
        );
        prop_assert_eq!(
            success_payload_scatter_chart(&ctx, &site, &range).unwrap(),
            success_payload_scatter_chart(&ctx, &site, &range).unwrap()
        );
    }
}
