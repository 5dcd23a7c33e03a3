use yew::prelude::*;

use crate::model::Building;
use crate::util::format_money;

#[derive(Properties, PartialEq, Clone)]
pub struct PlacementBannerProps {
    pub selected: Option<Building>,
    pub feedback: Option<String>,
    pub total: usize,
}

#[function_component]
pub fn PlacementBanner(props: &PlacementBannerProps) -> Html {
    let hint = match &props.selected {
        Some(b) => format!(
            "Placing {}: £{} to build, £{} upkeep, +{} satisfaction. Click the map, Esc to cancel.",
            b.kind,
            format_money(b.cost),
            format_money(b.upkeep),
            b.satisfaction
        ),
        None => "Pick a building on the left to start placing".to_string(),
    };
    html! {<div style="position:absolute; left:50%; bottom:28px; transform:translateX(-50%); background:rgba(22,27,34,0.92); border:1px solid #30363d; border-radius:10px; padding:10px 14px; display:flex; flex-direction:column; gap:6px; min-width:260px; text-align:center;">
        <div style="font-size:13px; opacity:0.8;">{ hint }</div>
        { if let Some(msg) = &props.feedback {
            if !msg.is_empty() {
                html!{ <div style="font-size:12px; line-height:1.25; background:#1c2128; border:1px solid #30363d; padding:6px 8px; border-radius:6px;">{ msg.clone() }</div>}
            } else { html!{} }
        } else { html!{} } }
        <div style="font-size:11px; opacity:0.6;">{ format!("Buildings on campus: {}", props.total) }</div>
    </div> }
}
