// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::LoadedImage;
use crate::ui::comparison::{self, KeyCommand, Side};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Comparison(comparison::Message),
    /// Divider key pressed while no widget captured it.
    Key(KeyCommand),
    /// Open the file dialog for one side of the pair.
    OpenDialog(Side),
    /// Result from the open file dialog.
    DialogClosed(Side, Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Result from background decoding. `generation` identifies the load
    /// request; results whose request was superseded are dropped.
    ImageLoaded {
        side: Side,
        generation: u64,
        path: PathBuf,
        result: Result<LoadedImage, Error>,
    },
    Swap,
    ResetDivider,
    /// Leave the comparison and return to the empty screen.
    Close,
    CycleTheme,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_COMPARE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Image to preload into the before slot.
    pub before: Option<PathBuf>,
    /// Image to preload into the after slot.
    pub after: Option<PathBuf>,
}
