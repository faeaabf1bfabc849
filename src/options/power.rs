//! System suspend/resume hooks

use std::sync::Arc;

/// Callback run when the system changes power state
pub type PowerCallback = Arc<dyn Fn() + Send + Sync>;

/// `WM_POWERBROADCAST` event codes
pub const PBT_APMSUSPEND: usize = 0x4;
pub const PBT_APMRESUMESUSPEND: usize = 0x7;
pub const PBT_APMRESUMEAUTOMATIC: usize = 0x12;

/// Power transitions the options react to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerEvent {
    /// Entering low power mode
    Suspend,
    /// Back from low power mode
    Resume,
}

impl PowerEvent {
    /// Map a `WM_POWERBROADCAST` wparam to an event
    pub fn from_broadcast(wparam: usize) -> Option<Self> {
        match wparam {
            PBT_APMSUSPEND => Some(PowerEvent::Suspend),
            PBT_APMRESUMEAUTOMATIC | PBT_APMRESUMESUSPEND => Some(PowerEvent::Resume),
            _ => None,
        }
    }
}
