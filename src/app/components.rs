//! Reusable UI component library. Styling lives in `input.css` under the BEM block names
//! these components emit (`btn`, `input__container`, `modal`, `card`, `badge`, `spinner`).

mod badge;
mod button;
mod card;
mod input;
mod modal;
mod spinner;

pub use badge::Badge;
pub use button::Button;
pub use card::Card;
pub use input::Input;
pub use modal::Modal;
pub use spinner::{Spinner, SpinnerIcon};
