//! Screen graph and parameter passing.
//!
//! The navigator is a stack of screen instances. Each instance owns its state
//! exclusively and carries a unique [`ScreenId`], so a response addressed to a
//! screen that has been popped (or re-created) can be recognized and dropped.

use std::fmt;

use garagem_core::VehicleId;

use crate::screens::{DetailScreen, FormScreen, ListScreen};

/// Identity of one screen instance on the stack.
///
/// Never reused: returning to a route creates a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(u64);

impl ScreenId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where to navigate, with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    VehicleList,
    VehicleDetail { vehicle_id: VehicleId },
    /// `None` selects create mode
    VehicleForm { vehicle_id: Option<VehicleId> },
}

/// State of one screen instance
#[derive(Debug, Clone)]
pub enum Screen {
    List(ListScreen),
    Detail(DetailScreen),
    Form(FormScreen),
}

impl Screen {
    pub fn from_route(route: Route) -> Self {
        match route {
            Route::VehicleList => Screen::List(ListScreen::new()),
            Route::VehicleDetail { vehicle_id } => Screen::Detail(DetailScreen::new(vehicle_id)),
            Route::VehicleForm { vehicle_id } => Screen::Form(FormScreen::new(vehicle_id)),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::List(_) => "Garagem",
            Screen::Detail(_) => "Detalhes do Veículo",
            Screen::Form(form) if form.is_edit() => "Editar Veículo",
            Screen::Form(_) => "Cadastrar Veículo",
        }
    }

    pub fn as_list(&self) -> Option<&ListScreen> {
        match self {
            Screen::List(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut ListScreen> {
        match self {
            Screen::List(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_detail(&self) -> Option<&DetailScreen> {
        match self {
            Screen::Detail(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_detail_mut(&mut self) -> Option<&mut DetailScreen> {
        match self {
            Screen::Detail(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_form(&self) -> Option<&FormScreen> {
        match self {
            Screen::Form(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_form_mut(&mut self) -> Option<&mut FormScreen> {
        match self {
            Screen::Form(s) => Some(s),
            _ => None,
        }
    }
}

/// A screen instance on the stack
#[derive(Debug, Clone)]
pub struct ScreenEntry {
    pub id: ScreenId,
    pub screen: Screen,
}

/// Navigation stack. The root (vehicle list) is never popped.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<ScreenEntry>,
    next_id: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Stack with the vehicle list as root
    pub fn new() -> Self {
        let mut nav = Self {
            stack: Vec::new(),
            next_id: 1,
        };
        nav.push(Route::VehicleList);
        nav
    }

    /// Push a new screen instance; returns its id.
    pub fn push(&mut self, route: Route) -> ScreenId {
        let id = ScreenId(self.next_id);
        self.next_id += 1;
        self.stack.push(ScreenEntry {
            id,
            screen: Screen::from_route(route),
        });
        id
    }

    /// Pop the top screen. Returns `None` at the root.
    pub fn pop(&mut self) -> Option<ScreenEntry> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    pub fn top(&self) -> &ScreenEntry {
        // Invariant: the root is pushed in `new` and never popped
        &self.stack[self.stack.len() - 1]
    }

    pub fn top_mut(&mut self) -> &mut ScreenEntry {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    pub fn top_id(&self) -> ScreenId {
        self.top().id
    }

    pub fn is_top(&self, id: ScreenId) -> bool {
        self.top_id() == id
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        self.stack.iter().any(|e| e.id == id)
    }

    pub fn get(&self, id: ScreenId) -> Option<&Screen> {
        self.stack.iter().find(|e| e.id == id).map(|e| &e.screen)
    }

    pub fn get_mut(&mut self, id: ScreenId) -> Option<&mut Screen> {
        self.stack
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.screen)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_root(&self) -> bool {
        self.stack.len() == 1
    }
}
