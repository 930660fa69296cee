/// Whether a mode handled the invocation or the next one should look at it.
pub enum CliModeResult {
    Finish,
    NothingToDo,
}
