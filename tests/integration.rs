// SPDX-License-Identifier: MPL-2.0
use iced_compare::app::config::{self, Config, GeneralConfig, DEFAULT_KEYBOARD_STEP_PERCENT};
use iced_compare::i18n::fluent::I18n;
use iced_compare::media::{self, LoadedImage};
use iced_compare::ui::comparison::{self, KeyCommand, Side};
use iced_compare::ui::state::FrameGeometry;
use image_rs::{Rgba, RgbaImage};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_png(path: &Path, width: u32, height: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(path)
        .expect("write png");
}

fn load(path: &Path) -> LoadedImage {
    LoadedImage {
        path: path.to_path_buf(),
        data: media::load_image(path).expect("image should load"),
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join(config::CONFIG_FILE);

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("label-before"), "Before");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("label-before"), "Avant");

    // The command line wins over the config file
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_hand_edited_slider_settings_are_clamped() {
    let dir = tempdir().expect("temp dir");
    let config_path = dir.path().join(config::CONFIG_FILE);
    fs::write(
        &config_path,
        "[general]\ntheme_mode = \"Dark\"\n\n[slider]\nhandle_radius = 500.0\nline_width = 0.0\nshow_labels = false\n",
    )
    .expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let settings = loaded.slider.resolve();
    assert_eq!(settings.handle_radius, config::MAX_HANDLE_RADIUS);
    assert_eq!(settings.line_width, config::MIN_LINE_WIDTH);
    assert!(!settings.show_labels);
    assert_eq!(settings.keyboard_step, DEFAULT_KEYBOARD_STEP_PERCENT);
}

#[test]
fn test_broken_settings_fall_back_with_warning() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join(config::CONFIG_FILE), "not = [valid").expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn test_compare_session_on_decoded_images() {
    let dir = tempdir().expect("temp dir");
    let before_path = dir.path().join("before.png");
    let after_path = dir.path().join("after.png");
    write_png(&before_path, 40, 20, [255, 0, 0, 255]);
    write_png(&after_path, 80, 40, [0, 0, 255, 255]);

    let mut state = comparison::State::new(load(&before_path), load(&after_path));
    assert!(state.aspect_ratios_match());
    assert_eq!(state.position().value(), 50.0);

    // Drag across a frame laid out 400px wide at x = 100
    let frame = FrameGeometry::new(100.0, 400.0);
    state.update(comparison::Message::PointerPressed);
    state.update(comparison::Message::PointerMoved { x: 200.0, frame });
    assert_eq!(state.position().value(), 25.0);
    state.update(comparison::Message::PointerMoved { x: 900.0, frame });
    assert_eq!(state.position().value(), 100.0);
    state.update(comparison::Message::PointerReleased);
    assert!(!state.is_dragging());

    state.update(KeyCommand::StepLeft { coarse: true }.into_message(1.0));
    assert_eq!(state.position().value(), 90.0);

    state.swap();
    assert_eq!(state.image(Side::Before).path, after_path);
    assert_eq!(state.position().value(), 90.0);
}

#[tokio::test]
async fn test_async_load_reports_decode_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("fake.jpg");
    fs::write(&path, b"plain text").expect("write file");

    let error = media::load_image_async(path).await.unwrap_err();
    assert_eq!(error.i18n_key(), "error-load-decode");
}
