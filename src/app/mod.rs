// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the comparison component.
//!
//! The `App` struct wires together localization, settings and the image pair,
//! and translates messages into side effects like config persistence, file
//! dialogs or image loading. Images are staged per side until both are
//! available, at which point the comparison is mounted.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, LoadedImage};
use crate::ui::comparison::{self, Side};
use crate::ui::theming::{ColorScheme, ThemeMode};
use config::{Config, SliderSettings};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 520;

/// A value for each side of the pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots<T> {
    pub before: T,
    pub after: T,
}

impl<T> Slots<T> {
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Before => &self.before,
            Side::After => &self.after,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Before => &mut self.before,
            Side::After => &mut self.after,
        }
    }
}

/// Message shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Warning(String),
    Error(String),
}

/// Root Iced application state that bridges the comparison, localization and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Directory used for saving settings, `None` for the resolved default.
    config_dir: Option<PathBuf>,
    comparison: Option<comparison::State>,
    /// Images waiting for their counterpart.
    staged: Slots<Option<LoadedImage>>,
    /// Generation of the load in flight for each slot.
    loading: Slots<Option<u64>>,
    next_generation: u64,
    theme_mode: ThemeMode,
    /// `theme_mode` resolved when it was set.
    is_dark: bool,
    colors: ColorScheme,
    slider: SliderSettings,
    status: Option<Status>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("comparing", &self.comparison.is_some())
            .field("theme_mode", &self.theme_mode)
            .field("status", &self.status)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires a Fn boot closure, flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and kicks off loading of any images named on the
    /// command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, config, config_warning, None)
    }

    fn with_config(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
        config_dir: Option<PathBuf>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme_mode = config.general.theme_mode;
        let is_dark = theme_mode.is_dark();

        let mut app = App {
            i18n,
            slider: config.slider.resolve(),
            config,
            config_dir,
            comparison: None,
            staged: Slots::default(),
            loading: Slots::default(),
            next_generation: 0,
            theme_mode,
            is_dark,
            colors: ColorScheme::for_dark(is_dark),
            status: None,
        };

        if let Some(key) = config_warning {
            app.status = Some(Status::Warning(app.i18n.tr(&key)));
        }

        let mut tasks = Vec::new();
        if let Some(path) = flags.before {
            tasks.push(app.load(Side::Before, path));
        }
        if let Some(path) = flags.after {
            tasks.push(app.load(Side::After, path));
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match &self.comparison {
            Some(state) => format!(
                "{} \u{21c4} {} - {app_name}",
                state.image(Side::Before).display_name(),
                state.image(Side::After).display_name(),
            ),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.comparison.is_some())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Comparison(message) => {
                self.handle_comparison_message(message);
                Task::none()
            }
            Message::Key(command) => {
                let step = self.slider.keyboard_step;
                self.handle_comparison_message(command.into_message(step));
                Task::none()
            }
            Message::OpenDialog(side) => self.open_dialog(side),
            Message::DialogClosed(side, path) => match path {
                Some(path) => self.load(side, path),
                // User cancelled the dialog
                None => Task::none(),
            },
            Message::FileDropped(path) => {
                let side = self.drop_target();
                self.load(side, path)
            }
            Message::ImageLoaded {
                side,
                generation,
                path,
                result,
            } => {
                self.handle_image_loaded(side, generation, path, result);
                Task::none()
            }
            Message::Swap => {
                match &mut self.comparison {
                    Some(state) => state.swap(),
                    None => std::mem::swap(&mut self.staged.before, &mut self.staged.after),
                }
                // Pending loads follow their slot
                std::mem::swap(&mut self.loading.before, &mut self.loading.after);
                Task::none()
            }
            Message::ResetDivider => {
                self.handle_comparison_message(comparison::Message::Reset);
                Task::none()
            }
            Message::Close => {
                // Dropping the component also drops any drag in progress
                self.comparison = None;
                self.staged = Slots::default();
                // Results of loads still in flight no longer match any slot
                self.loading = Slots::default();
                self.status = None;
                tracing::info!("comparison closed");
                Task::none()
            }
            Message::CycleTheme => {
                self.cycle_theme();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            comparison: self.comparison.as_ref(),
            staged: &self.staged,
            loading: &self.loading,
            theme_mode: self.theme_mode,
            colors: &self.colors,
            slider: self.slider,
            status: self.status.as_ref(),
        })
    }

    fn handle_comparison_message(&mut self, message: comparison::Message) {
        // Input that arrives after the comparison was closed is dropped
        let Some(state) = &mut self.comparison else {
            return;
        };

        match state.update(message) {
            comparison::Event::DragStarted => tracing::debug!("divider drag started"),
            comparison::Event::DragEnded => {
                tracing::debug!(position = state.position().value(), "divider drag ended");
            }
            comparison::Event::PositionChanged(_) | comparison::Event::None => {}
        }
    }

    /// Slot that a dropped file fills: before first, then after. Once a
    /// comparison is showing, drops replace the after image.
    fn drop_target(&self) -> Side {
        if self.comparison.is_none()
            && self.staged.before.is_none()
            && self.loading.before.is_none()
        {
            Side::Before
        } else {
            Side::After
        }
    }

    fn open_dialog(&self, side: Side) -> Task<Message> {
        let title = match side {
            Side::Before => self.i18n.tr("dialog-title-before"),
            Side::After => self.i18n.tr("dialog-title-after"),
        };
        let filter_name = self.i18n.tr("dialog-filter-images");

        Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .set_title(&title)
                    .add_filter(&filter_name, media::IMAGE_EXTENSIONS)
                    .pick_file()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            move |path| Message::DialogClosed(side, path),
        )
    }

    fn load(&mut self, side: Side, path: PathBuf) -> Task<Message> {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        *self.loading.get_mut(side) = Some(generation);
        tracing::info!(?side, generation, path = %path.display(), "loading image");

        let target = path.clone();
        Task::perform(media::load_image_async(path), move |result| {
            Message::ImageLoaded {
                side,
                generation,
                path: target,
                result,
            }
        })
    }

    /// Slot currently waiting on the load tagged `generation`, if any.
    /// A swap moves pending loads, so this may differ from the requested side.
    fn pending_slot(&self, generation: u64) -> Option<Side> {
        [Side::Before, Side::After]
            .into_iter()
            .find(|&side| *self.loading.get(side) == Some(generation))
    }

    fn handle_image_loaded(
        &mut self,
        requested: Side,
        generation: u64,
        path: PathBuf,
        result: Result<LoadedImage, Error>,
    ) {
        let Some(side) = self.pending_slot(generation) else {
            tracing::debug!(
                side = ?requested,
                generation,
                path = %path.display(),
                "dropping superseded image load"
            );
            return;
        };
        *self.loading.get_mut(side) = None;

        let image = match result {
            Ok(image) => image,
            Err(error) => {
                tracing::warn!(?side, path = %path.display(), %error, "failed to load image");
                let path = path.display().to_string();
                self.status = Some(Status::Error(self.i18n.tr_with_args(
                    error.i18n_key(),
                    &[("path", path.as_str()), ("details", error.details())],
                )));
                return;
            }
        };

        match &mut self.comparison {
            Some(state) => state.replace(side, image),
            None => {
                *self.staged.get_mut(side) = Some(image);
                self.mount_if_ready();
            }
        }

        self.status = match &self.comparison {
            Some(state) if !state.aspect_ratios_match() => {
                Some(Status::Warning(self.i18n.tr("warning-aspect-mismatch")))
            }
            _ => None,
        };
    }

    /// Mounts the comparison once both slots hold an image. A lone staged
    /// image stays where it is.
    fn mount_if_ready(&mut self) {
        if self.staged.before.is_none() || self.staged.after.is_none() {
            return;
        }
        let (Some(before), Some(after)) = (self.staged.before.take(), self.staged.after.take())
        else {
            return;
        };

        tracing::info!(
            before = %before.path.display(),
            after = %after.path.display(),
            "comparison ready"
        );
        self.comparison = Some(comparison::State::new(before, after));
    }

    fn cycle_theme(&mut self) {
        self.theme_mode = self.theme_mode.next();
        self.is_dark = self.theme_mode.is_dark();
        self.colors = ColorScheme::for_dark(self.is_dark);
        self.config.general.theme_mode = self.theme_mode;

        if let Err(error) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(%error, "failed to save settings");
            self.status = Some(Status::Error(
                self.i18n
                    .tr_with_args(error.i18n_key(), &[("details", error.details())]),
            ));
        }
    }
}
