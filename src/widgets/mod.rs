// Reusable UI widgets

pub mod card_list;
pub mod menu;
pub mod outline_card;
pub mod spinner;
pub mod text_input;
pub mod toast;

pub use card_list::{CardList, CardListState};
pub use menu::{default_entries, Menu, MenuEntry, MenuState};
pub use outline_card::{OutlineCard, CARD_HEIGHT};
pub use spinner::{Spinner, SpinnerWidget};
pub use text_input::{TextInputWidget, TextInputWidgetExt};
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
