use super::{
    campus_view::{CampusView, ControllerHandle},
    inventory_panel::InventoryPanel,
    placement_banner::PlacementBanner,
};
use crate::config::Settings;
use crate::input::InteractionController;
use crate::inventory::{sync_placements, CounterLabels, CounterSlot, InventoryCoordinator};
use crate::model::{Building, BuildingType, CampusAction, CampusState};
use crate::state::Camera;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_memo((), |_| Settings::load());
    let campus = use_reducer({
        let policy = settings.placement;
        move || CampusState::new(policy)
    });
    let labels = use_reducer({
        let types = settings.building_types.clone();
        move || CounterLabels::zeroed(&types)
    });

    // Placement clicks go straight to the campus reducer, which knows what is selected.
    let controller = {
        let campus = campus.clone();
        let settings = settings.clone();
        use_mut_ref(move || {
            let on_place =
                Callback::from(move |(x, y): (f64, f64)| campus.dispatch(CampusAction::PlaceAt { x, y }));
            InteractionController::new(
                Camera::default(),
                settings.max_zoom,
                settings.placement,
                on_place,
            )
        })
    };

    let inventory = {
        let campus = campus.clone();
        let labels = labels.clone();
        let controller = controller.clone();
        let types = settings.building_types.clone();
        use_mut_ref(move || {
            InventoryCoordinator::new(
                &types,
                |kind| CounterSlot::new(kind, labels.clone()),
                Callback::from(move |building: Building| campus.dispatch(CampusAction::Select(building))),
                Callback::from(move |placing: bool| controller.borrow_mut().set_placing_building(placing)),
            )
        })
    };

    // Mirror newly placed buildings into the inventory counts
    {
        let inventory = inventory.clone();
        let synced = use_mut_ref(|| 0usize);
        let campus = campus.clone();
        let placed = campus.placed.len();
        use_effect_with(placed, move |_| {
            sync_placements(&mut inventory.borrow_mut(), &campus.placed, &mut synced.borrow_mut());
            || ()
        });
    }

    let on_select = {
        let inventory = inventory.clone();
        Callback::from(move |kind: BuildingType| {
            inventory.borrow_mut().on_building_type_selected(kind);
        })
    };
    let on_cancel = {
        let controller = controller.clone();
        let campus = campus.clone();
        Callback::from(move |_| {
            controller.borrow_mut().set_placing_building(false);
            campus.dispatch(CampusAction::CancelSelection);
        })
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116; color:#e6edf3; font-family:sans-serif;">
            <CampusView
                controller={ControllerHandle(controller.clone())}
                campus={campus.clone()}
                on_cancel={on_cancel}
            />
            <InventoryPanel
                types={settings.building_types.clone()}
                labels={(*labels).clone()}
                selected={campus.selected.map(|b| b.kind)}
                on_select={on_select}
            />
            <PlacementBanner
                selected={campus.selected}
                feedback={campus.feedback.clone()}
                total={campus.placed.len()}
            />
        </div>
    }
}
