// Placed-building counts and the labels that show them.

use std::collections::BTreeMap;
use std::rc::Rc;
use yew::{Callback, Reducible, UseReducerHandle};

use crate::model::{Building, BuildingType, PlacedBuilding};

/// A text label the inventory writes counts into.
pub trait CountDisplay {
    fn set_text(&mut self, text: &str);
}

struct Entry<D> {
    count: u32,
    display: D,
}

/// Owns the per-type placed counts and keeps their displays current. Also
/// turns "player picked type X" into a building request plus a switch into
/// placement mode.
pub struct InventoryCoordinator<D: CountDisplay> {
    entries: BTreeMap<BuildingType, Entry<D>>,
    on_select: Callback<Building>,
    on_placement_mode: Callback<bool>,
}

impl<D: CountDisplay> InventoryCoordinator<D> {
    pub fn new(
        types: &[BuildingType],
        mut display_for: impl FnMut(BuildingType) -> D,
        on_select: Callback<Building>,
        on_placement_mode: Callback<bool>,
    ) -> Self {
        let entries = types
            .iter()
            .map(|&kind| {
                let mut display = display_for(kind);
                display.set_text("0");
                (kind, Entry { count: 0, display })
            })
            .collect();
        Self {
            entries,
            on_select,
            on_placement_mode,
        }
    }

    pub fn types(&self) -> impl Iterator<Item = BuildingType> + '_ {
        self.entries.keys().copied()
    }

    pub fn on_building_type_selected(&mut self, kind: BuildingType) {
        let building = Building::from_template(kind);
        self.on_select.emit(building);
        self.on_placement_mode.emit(true);
    }

    /// Panics for a type this inventory was not built with.
    pub fn on_building_placed(&mut self, kind: BuildingType) {
        let entry = self.entry_mut(kind);
        entry.count += 1;
        let count = entry.count;
        entry.display.set_text(&count.to_string());
        log::debug!("{kind} count -> {count}");
    }

    /// Overwrite a count, e.g. after buildings were removed elsewhere.
    pub fn set_count(&mut self, kind: BuildingType, count: u32) {
        let entry = self.entry_mut(kind);
        entry.count = count;
        entry.display.set_text(&count.to_string());
    }

    pub fn count(&self, kind: BuildingType) -> u32 {
        self.entries.get(&kind).map_or(0, |e| e.count)
    }

    pub fn total(&self) -> u32 {
        self.entries.values().map(|e| e.count).sum()
    }

    fn entry_mut(&mut self, kind: BuildingType) -> &mut Entry<D> {
        match self.entries.get_mut(&kind) {
            Some(entry) => entry,
            None => panic!("building type {kind} is not part of this inventory"),
        }
    }
}

/// Forward placements recorded since the last call; `synced` is how many of
/// `placed` the inventory has already seen.
pub fn sync_placements<D: CountDisplay>(
    inventory: &mut InventoryCoordinator<D>,
    placed: &[PlacedBuilding],
    synced: &mut usize,
) {
    for building in placed.get(*synced..).unwrap_or(&[]) {
        inventory.on_building_placed(building.kind);
    }
    *synced = placed.len();
}

/// Counter text per building type, as rendered by the inventory panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CounterLabels {
    pub labels: BTreeMap<BuildingType, String>,
}

impl CounterLabels {
    /// Labels already reading "0", so the inventory's initial writes are no-ops.
    pub fn zeroed(types: &[BuildingType]) -> Self {
        Self {
            labels: types.iter().map(|&kind| (kind, "0".to_string())).collect(),
        }
    }

    pub fn get(&self, kind: BuildingType) -> &str {
        self.labels.get(&kind).map_or("0", String::as_str)
    }
}

pub enum LabelAction {
    Set(BuildingType, String),
}

impl Reducible for CounterLabels {
    type Action = LabelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let LabelAction::Set(kind, text) = action;
        if self.labels.get(&kind) == Some(&text) {
            return self;
        }
        let mut new = (*self).clone();
        new.labels.insert(kind, text);
        Rc::new(new)
    }
}

/// Display handle backed by one entry of a [`CounterLabels`] reducer.
pub struct CounterSlot {
    kind: BuildingType,
    labels: UseReducerHandle<CounterLabels>,
}

impl CounterSlot {
    pub fn new(kind: BuildingType, labels: UseReducerHandle<CounterLabels>) -> Self {
        Self { kind, labels }
    }
}

impl CountDisplay for CounterSlot {
    fn set_text(&mut self, text: &str) {
        self.labels.dispatch(LabelAction::Set(self.kind, text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::input::{InteractionController, InteractionMode, MouseButton, PlacementPolicy};
    use crate::model::{CampusAction, CampusState};
    use crate::state::Camera;

    #[derive(Clone, Default)]
    struct Label(Rc<RefCell<String>>);

    impl CountDisplay for Label {
        fn set_text(&mut self, text: &str) {
            *self.0.borrow_mut() = text.to_string();
        }
    }

    struct Fixture {
        inventory: InventoryCoordinator<Label>,
        labels: BTreeMap<BuildingType, Label>,
        selected: Rc<RefCell<Vec<Building>>>,
        mode_requests: Rc<RefCell<Vec<bool>>>,
    }

    fn fixture(types: &[BuildingType]) -> Fixture {
        let labels: BTreeMap<_, _> = types.iter().map(|&t| (t, Label::default())).collect();
        let selected = Rc::new(RefCell::new(Vec::new()));
        let mode_requests = Rc::new(RefCell::new(Vec::new()));
        let inventory = {
            let labels = labels.clone();
            let selected = selected.clone();
            let mode_requests = mode_requests.clone();
            InventoryCoordinator::new(
                types,
                move |t| labels[&t].clone(),
                Callback::from(move |b: Building| selected.borrow_mut().push(b)),
                Callback::from(move |p: bool| mode_requests.borrow_mut().push(p)),
            )
        };
        Fixture { inventory, labels, selected, mode_requests }
    }

    #[test]
    fn counts_start_at_zero_with_zero_labels() {
        let f = fixture(&BuildingType::ALL);
        for t in BuildingType::ALL {
            assert_eq!(f.inventory.count(t), 0);
            assert_eq!(*f.labels[&t].0.borrow(), "0");
        }
        assert_eq!(f.inventory.total(), 0);
    }

    #[test]
    fn placing_three_dining_halls_shows_three() {
        let mut f = fixture(&BuildingType::ALL);
        for _ in 0..3 {
            f.inventory.on_building_placed(BuildingType::Dining);
        }
        assert_eq!(f.inventory.count(BuildingType::Dining), 3);
        assert_eq!(*f.labels[&BuildingType::Dining].0.borrow(), "3");
        assert_eq!(*f.labels[&BuildingType::Learning].0.borrow(), "0");
        assert_eq!(f.inventory.total(), 3);
    }

    #[test]
    fn selecting_requests_building_then_placement_mode() {
        let mut f = fixture(&BuildingType::ALL);
        f.inventory.on_building_type_selected(BuildingType::Learning);
        f.inventory.on_building_type_selected(BuildingType::Learning);
        assert_eq!(
            *f.selected.borrow(),
            vec![Building::from_template(BuildingType::Learning); 2]
        );
        assert_eq!(*f.mode_requests.borrow(), vec![true, true]);
    }

    #[test]
    fn set_count_overwrites_and_refreshes_label() {
        let mut f = fixture(&BuildingType::ALL);
        f.inventory.on_building_placed(BuildingType::Recreation);
        f.inventory.set_count(BuildingType::Recreation, 7);
        assert_eq!(f.inventory.count(BuildingType::Recreation), 7);
        assert_eq!(*f.labels[&BuildingType::Recreation].0.borrow(), "7");
    }

    #[test]
    fn unconfigured_type_counts_as_zero() {
        let f = fixture(&[BuildingType::Dining]);
        assert_eq!(f.inventory.count(BuildingType::Learning), 0);
        assert_eq!(f.inventory.types().collect::<Vec<_>>(), vec![BuildingType::Dining]);
    }

    #[test]
    #[should_panic(expected = "not part of this inventory")]
    fn placing_unconfigured_type_panics() {
        let mut f = fixture(&[BuildingType::Dining]);
        f.inventory.on_building_placed(BuildingType::Accommodation);
    }

    #[test]
    fn label_reducer_skips_unchanged_text() {
        let labels = Rc::new(CounterLabels::default());
        let next = labels.clone().reduce(LabelAction::Set(BuildingType::Dining, "1".into()));
        assert_eq!(next.get(BuildingType::Dining), "1");
        assert_eq!(next.get(BuildingType::Learning), "0");
        let same = next.clone().reduce(LabelAction::Set(BuildingType::Dining, "1".into()));
        assert!(Rc::ptr_eq(&next, &same));
    }

    #[test]
    fn zeroed_labels_absorb_initial_writes() {
        let labels = Rc::new(CounterLabels::zeroed(&BuildingType::ALL));
        let same = labels.clone().reduce(LabelAction::Set(BuildingType::Learning, "0".into()));
        assert!(Rc::ptr_eq(&labels, &same));
    }

    #[test]
    fn sync_forwards_only_new_placements() {
        let mut f = fixture(&BuildingType::ALL);
        let mut synced = 0;
        let mut placed = vec![PlacedBuilding { kind: BuildingType::Dining, x: 0.0, y: 0.0 }];
        sync_placements(&mut f.inventory, &placed, &mut synced);
        sync_placements(&mut f.inventory, &placed, &mut synced);
        assert_eq!(f.inventory.count(BuildingType::Dining), 1);

        placed.push(PlacedBuilding { kind: BuildingType::Learning, x: 64.0, y: 0.0 });
        placed.push(PlacedBuilding { kind: BuildingType::Dining, x: 128.0, y: 0.0 });
        sync_placements(&mut f.inventory, &placed, &mut synced);
        assert_eq!(synced, 3);
        assert_eq!(f.inventory.count(BuildingType::Dining), 2);
        assert_eq!(f.inventory.count(BuildingType::Learning), 1);
        assert_eq!(*f.labels[&BuildingType::Dining].0.borrow(), "2");
    }

    struct Wired {
        controller: Rc<RefCell<InteractionController<Camera>>>,
        campus: Rc<RefCell<Rc<CampusState>>>,
        inventory: InventoryCoordinator<Label>,
        label: Label,
    }

    // Controller, campus reducer and inventory hooked together the way the app does it.
    fn wired(policy: PlacementPolicy) -> Wired {
        let campus = Rc::new(RefCell::new(Rc::new(CampusState::new(policy))));
        let dispatch = {
            let campus = campus.clone();
            move |action: CampusAction| {
                let current = campus.borrow().clone();
                *campus.borrow_mut() = current.reduce(action);
            }
        };
        let on_place = {
            let dispatch = dispatch.clone();
            Callback::from(move |(x, y): (f64, f64)| dispatch(CampusAction::PlaceAt { x, y }))
        };
        let controller = Rc::new(RefCell::new(InteractionController::new(
            Camera::default(),
            2.0,
            policy,
            on_place,
        )));
        let label = Label::default();
        let inventory = {
            let label = label.clone();
            let controller = controller.clone();
            InventoryCoordinator::new(
                &[BuildingType::Dining],
                move |_| label.clone(),
                Callback::from(move |b: Building| dispatch(CampusAction::Select(b))),
                Callback::from(move |p: bool| controller.borrow_mut().set_placing_building(p)),
            )
        };
        Wired { controller, campus, inventory, label }
    }

    #[test]
    fn selecting_enters_placement_mode_from_either_mode() {
        let mut w = wired(PlacementPolicy::Sticky);
        assert_eq!(w.controller.borrow().mode(), InteractionMode::FreeCamera);
        w.inventory.on_building_type_selected(BuildingType::Dining);
        assert_eq!(w.controller.borrow().mode(), InteractionMode::PlacingBuilding);
        w.inventory.on_building_type_selected(BuildingType::Dining);
        assert_eq!(w.controller.borrow().mode(), InteractionMode::PlacingBuilding);
        assert_eq!(
            w.campus.borrow().selected,
            Some(Building::from_template(BuildingType::Dining))
        );
    }

    #[test]
    fn select_place_and_count_end_to_end() {
        let mut w = wired(PlacementPolicy::SingleShot);
        let mut synced = 0;
        w.inventory.on_building_type_selected(BuildingType::Dining);
        assert!(w.controller.borrow_mut().on_press(MouseButton::Primary, 400.0, 300.0));
        assert_eq!(w.controller.borrow().mode(), InteractionMode::FreeCamera);

        let placed = w.campus.borrow().placed.clone();
        assert_eq!(placed, vec![PlacedBuilding { kind: BuildingType::Dining, x: 0.0, y: 0.0 }]);
        sync_placements(&mut w.inventory, &placed, &mut synced);
        assert_eq!(w.inventory.count(BuildingType::Dining), 1);
        assert_eq!(*w.label.0.borrow(), "1");

        // A second press without a new selection pans instead of placing.
        w.controller.borrow_mut().on_press(MouseButton::Primary, 400.0, 300.0);
        assert_eq!(w.campus.borrow().placed.len(), 1);
    }
}
