//! Control state and the subscriptions that re-render charts.
//!
//! Each chart container subscribes a render function to the controls it
//! reads. Changing a control re-runs exactly the subscribers of that
//! control, and each result replaces whatever the container held before.

use crate::callbacks::{success_pie_chart, success_payload_scatter_chart};
use crate::context::LaunchContext;
use crate::figure::Figure;
use crate::layout::{
    DashboardLayout, PAYLOAD_SLIDER_ID, PIE_CHART_ID, SCATTER_CHART_ID, SITE_DROPDOWN_ID,
};
use slr_launch::{PayloadRange, SiteSelection};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

impl ControlId {
    pub fn dom_id(&self) -> &'static str {
        match self {
            ControlId::SiteDropdown => SITE_DROPDOWN_ID,
            ControlId::PayloadSlider => PAYLOAD_SLIDER_ID,
        }
    }
}

/// Current values of the two controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl ControlState {
    /// The layout's default control values.
    pub fn initial(layout: &DashboardLayout) -> Self {
        Self {
            site: SiteSelection::from_value(&layout.site_dropdown.value),
            payload: layout.payload_slider.value,
        }
    }
}

type RenderFn = fn(&LaunchContext, &ControlState) -> anyhow::Result<Figure>;

struct Subscription {
    output: &'static str,
    inputs: &'static [ControlId],
    render: RenderFn,
}

fn render_pie(ctx: &LaunchContext, controls: &ControlState) -> anyhow::Result<Figure> {
    success_pie_chart(ctx, &controls.site).map(Figure::Pie)
}

fn render_scatter(ctx: &LaunchContext, controls: &ControlState) -> anyhow::Result<Figure> {
    success_payload_scatter_chart(ctx, &controls.site, &controls.payload).map(Figure::Scatter)
}

/// A figure produced for one chart container.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub output: &'static str,
    pub figure: Figure,
}

/// The dashboard: context, layout, control values and displayed figures.
pub struct Dashboard {
    ctx: LaunchContext,
    layout: DashboardLayout,
    controls: ControlState,
    subscriptions: Vec<Subscription>,
    displayed: BTreeMap<&'static str, Figure>,
}

impl Dashboard {
    /// Build the layout, subscribe both charts and render them once.
    pub fn new(ctx: LaunchContext) -> anyhow::Result<Self> {
        let layout = DashboardLayout::build(&ctx);
        let controls = ControlState::initial(&layout);
        let subscriptions = vec![
            Subscription {
                output: PIE_CHART_ID,
                inputs: &[ControlId::SiteDropdown],
                render: render_pie,
            },
            Subscription {
                output: SCATTER_CHART_ID,
                inputs: &[ControlId::SiteDropdown, ControlId::PayloadSlider],
                render: render_scatter,
            },
        ];
        let mut dashboard = Self {
            ctx,
            layout,
            controls,
            subscriptions,
            displayed: BTreeMap::new(),
        };
        dashboard.render_all()?;
        Ok(dashboard)
    }

    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    /// The figure currently shown in `output`, if any.
    pub fn figure(&self, output: &str) -> Option<&Figure> {
        self.displayed.get(output)
    }

    /// Re-render every subscribed container.
    pub fn render_all(&mut self) -> anyhow::Result<Vec<Rendered>> {
        self.notify(|_| true)
    }

    /// Change the dropdown value. Returns the charts that were re-rendered,
    /// which is none if the value did not change.
    pub fn set_site(&mut self, site: SiteSelection) -> anyhow::Result<Vec<Rendered>> {
        if self.controls.site == site {
            return Ok(Vec::new());
        }
        log::info!("[SLR] {} -> {}", ControlId::SiteDropdown.dom_id(), site);
        self.controls.site = site;
        self.notify(|inputs| inputs.contains(&ControlId::SiteDropdown))
    }

    /// Change the slider value. Returns the charts that were re-rendered.
    pub fn set_payload_range(&mut self, payload: PayloadRange) -> anyhow::Result<Vec<Rendered>> {
        if self.controls.payload == payload {
            return Ok(Vec::new());
        }
        log::info!(
            "[SLR] {} -> [{}, {}]",
            ControlId::PayloadSlider.dom_id(),
            payload.low(),
            payload.high()
        );
        self.controls.payload = payload;
        self.notify(|inputs| inputs.contains(&ControlId::PayloadSlider))
    }

    fn notify(&mut self, subscribed: impl Fn(&[ControlId]) -> bool) -> anyhow::Result<Vec<Rendered>> {
        let mut rendered = Vec::new();
        for sub in self.subscriptions.iter().filter(|s| subscribed(s.inputs)) {
            let figure = (sub.render)(&self.ctx, &self.controls)?;
            self.displayed.insert(sub.output, figure.clone());
            rendered.push(Rendered {
                output: sub.output,
                figure,
            });
        }
        Ok(rendered)
    }
}
