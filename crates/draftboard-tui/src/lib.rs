// Terminal front end for the draft board.
//
// `app` owns the draft state and applies commands; `tui` renders snapshots
// and turns key presses into commands. `protocol` defines the messages
// exchanged between the two tasks.

pub mod app;
pub mod protocol;
pub mod tui;
