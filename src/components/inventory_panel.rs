use yew::prelude::*;

use crate::inventory::CounterLabels;
use crate::model::BuildingType;
use crate::util::format_money;

#[derive(Properties, PartialEq, Clone)]
pub struct InventoryRowProps {
    pub kind: BuildingType,
    pub count: String,
    #[prop_or(false)]
    pub selected: bool,
    pub on_select: Callback<BuildingType>,
}

#[function_component(InventoryRow)]
pub fn inventory_row(props: &InventoryRowProps) -> Html {
    let onclick = {
        let cb = props.on_select.clone();
        let kind = props.kind;
        Callback::from(move |_| cb.emit(kind))
    };
    let border = if props.selected { "#58a6ff" } else { "#30363d" };
    let template = props.kind.template();
    html! {
        <div style="display:flex; align-items:center; gap:10px;">
            <button id={format!("build-{}", props.kind.slug())} {onclick}
                style={format!("display:flex; align-items:center; gap:8px; flex:1; padding:6px 8px; background:#1c2128; border:2px solid {}; border-radius:6px; color:inherit; cursor:pointer;", border)}>
                <span style={format!("display:inline-block; width:18px; height:18px; background:{}; border-radius:3px;", props.kind.color())}></span>
                <span style="flex:1; text-align:left; font-weight:500;">{ props.kind.name() }</span>
                <span style="font-size:11px; opacity:0.7;">{ format!("£{}", format_money(template.cost)) }</span>
            </button>
            <span style="min-width:32px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;">{ props.count.clone() }</span>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct InventoryPanelProps {
    pub types: Vec<BuildingType>,
    pub labels: CounterLabels,
    pub selected: Option<BuildingType>,
    pub on_select: Callback<BuildingType>,
}

#[function_component]
pub fn InventoryPanel(props: &InventoryPanelProps) -> Html {
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:250px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
            <div style="font-weight:600;">{"Buildings"}</div>
            { for props.types.iter().map(|&kind| html! {
                <InventoryRow
                    key={kind.slug()}
                    {kind}
                    count={props.labels.get(kind).to_string()}
                    selected={props.selected == Some(kind)}
                    on_select={props.on_select.clone()}
                />
            }) }
        </div>
    }
}
