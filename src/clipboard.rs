//! Clipboard output.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use passgauge::{Error, Result};

/// Place `text` on the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;

    // Read back so the provider has served the contents, then wipe our copy
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
