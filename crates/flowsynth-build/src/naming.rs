//! Generated identifiers.
//!
//! Every local in the synthesized `main` is derived from the position of the
//! entity it holds. Descriptor ids and names never become identifiers; they
//! only appear as string literals. Import aliases live in the type namespace
//! and generated locals in the value namespace, so the two cannot collide.

use proc_macro2::Ident;
use quote::format_ident;

///
/// Position
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Position {
    Resource(usize),
    Channel(usize),
    ActionSettings(usize),
    Action(usize),
    Trigger(usize),
    Handler(usize, usize),
    HandlerActionSettings(usize, usize, usize),
    HandlerAction(usize, usize, usize),
}

impl Position {
    #[must_use]
    pub fn ident(self) -> Ident {
        match self {
            Self::Resource(i) => format_ident!("resource{i}"),
            Self::Channel(i) => format_ident!("channel{i}"),
            Self::ActionSettings(i) => format_ident!("action_settings{i}"),
            Self::Action(i) => format_ident!("action{i}"),
            Self::Trigger(i) => format_ident!("trg{i}"),
            Self::Handler(i, j) => format_ident!("handler{i}_{j}"),
            Self::HandlerActionSettings(i, j, k) => format_ident!("settings{i}_{j}_{k}"),
            Self::HandlerAction(i, j, k) => format_ident!("action{i}_{j}_{k}"),
        }
    }
}

// fixed locals, none of them end in a digit
#[must_use]
pub fn app() -> Ident {
    format_ident!("app")
}

#[must_use]
pub fn channel_name() -> Ident {
    format_ident!("name")
}

#[must_use]
pub fn channel_buffer_size() -> Ident {
    format_ident!("buff_size")
}

#[must_use]
pub fn engine() -> Ident {
    format_ident!("app_engine")
}
