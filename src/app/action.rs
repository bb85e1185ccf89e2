/// Side effects requested by the event handler and carried out by the run loop.
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    /// Drop every piece of component state and render the page afresh.
    Remount,
    /// Persist the current page settings to the config file.
    SaveConfig,
}
