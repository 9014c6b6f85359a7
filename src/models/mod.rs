pub mod frag;
pub mod session;
pub mod weapon;

pub use frag::FragEvent;
pub use session::{LogSession, ParsedLog};
pub use weapon::{IconCategory, WeaponIconTable};
