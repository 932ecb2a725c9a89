#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-multilist/")]

//! # bubbletea-multilist
//!
//! A multi-select form-control widget for [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs)
//! applications, built on the component conventions of
//! [bubbletea-widgets](https://crates.io/crates/bubbletea-widgets).
//!
//! The widget enhances a native multi-select (modeled by [`NativeSelect`])
//! with two collaborating components coordinated by [`MultiList`]:
//!
//! - a **selection list** ([`list::Model`]): the ordered chosen entries, with
//!   drag-and-drop reordering, keyboard removal, and an immutable snapshot
//!   for reset;
//! - a **suggestion selector** ([`selector::Model`]): a search input over the
//!   not-yet-chosen candidates, with a debounced remote lookup or a local
//!   fuzzy filter, and a dropdown for picking candidates.
//!
//! Selecting a suggestion moves it into the selection; removing a selected
//! entry returns it to the suggestion pool; every selection change is
//! committed back to the native control, which stays the durable state.
//!
//! ## Quick start
//!
//! ```rust
//! use bubbletea_multilist::{Config, MultiList, NativeSelect, OptionEntry};
//!
//! let control = NativeSelect::from_entries(vec![
//!     OptionEntry::new("gtr", "Guitar").with_selected(true),
//!     OptionEntry::new("bss", "Bass"),
//!     OptionEntry::new("drm", "Drums"),
//! ]);
//!
//! let mut widget = MultiList::new(control, Config::default().with_max_selected(2))
//!     .expect("valid configuration");
//!
//! widget.select("bss");
//! let ids: Vec<String> = widget.selected().into_iter().map(|c| c.id).collect();
//! assert_eq!(ids, ["gtr", "bss"]);
//!
//! // At the cap of 2, the selector is disabled until something is removed.
//! assert!(!widget.selector().is_enabled());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! [`MultiList`] implements `bubbletea_rs::Model`, so it can run as a program
//! of its own or be embedded in a host model that forwards messages:
//!
//! ```rust
//! use bubbletea_multilist::{Config, MultiList, NativeSelect};
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     picker: MultiList,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let picker = MultiList::new(NativeSelect::new(), Config::default())
//!             .expect("valid configuration");
//!         (Self { picker }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.picker.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.picker.view()
//!     }
//! }
//! ```
//!
//! ## Drag-and-drop
//!
//! Drag interaction is a typed protocol, independent of any pointer API:
//! hosts translate their pointer events into [`list::DragEvent`]s and feed
//! them in as [`list::DragMsg`] messages. See the [`list::drop_side`] helper
//! for turning raw pointer geometry into a drop side.

pub mod choice;
pub mod config;
pub mod control;
pub mod debounce;
pub mod list;
pub mod native;
pub mod selector;

pub use choice::{Choice, Choices};
pub use config::{Config, ConfigError, Strings};
pub use control::Model as MultiList;
pub use debounce::{Debouncer, ElapsedMsg};
pub use list::Model as List;
pub use list::{
    drop_side, DefaultDelegate, DragEvent, DragMsg, DragState, DropSide, ItemDelegate, ListEvent,
    ListKeyMap, ListStyles,
};
pub use native::{NativeSelect, OptionEntry};
pub use selector::Model as Selector;
pub use selector::{
    AdmitPredicate, DismissMsg, Lookup, LookupResultsMsg, SelectorKeyMap, SelectorStyles,
};

/// Prelude for convenient imports.
///
/// ```rust
/// use bubbletea_multilist::prelude::*;
///
/// let widget = MultiList::new(NativeSelect::new(), Config::default());
/// assert!(widget.is_ok());
/// ```
pub mod prelude {
    pub use crate::choice::{Choice, Choices};
    pub use crate::config::{Config, ConfigError, Strings};
    pub use crate::control::Model as MultiList;
    pub use crate::debounce::{Debouncer, ElapsedMsg};
    pub use crate::list::Model as List;
    pub use crate::list::{
        drop_side, DefaultDelegate, DragEvent, DragMsg, DragState, DropSide, ItemDelegate,
        ListEvent, ListKeyMap, ListStyles,
    };
    pub use crate::native::{NativeSelect, OptionEntry};
    pub use crate::selector::Model as Selector;
    pub use crate::selector::{
        AdmitPredicate, DismissMsg, Lookup, LookupResultsMsg, SelectorKeyMap, SelectorStyles,
    };
}
