use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

/// Load the drafting-form vocabularies from the store's settings range.
pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let options = store.load_options()?;
    Ok(CmdResult::default().with_options(options))
}
