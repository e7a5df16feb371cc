// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config};
use iced_folio::content::{CATEGORIES, GALLERY};
use iced_folio::domain::asset::{AssetRegistry, AssetSource, LoadState};
use iced_folio::domain::carousel::Carousel;
use iced_folio::domain::contact::{ContactForm, Field, FieldError, SubmitStatus};
use iced_folio::domain::filter::CategoryFilter;
use iced_folio::error::AssetError;
use iced_folio::i18n::fluent::I18n;
use iced_folio::media::{self, loader, mailto_uri, AssetStore, AssetView, LoaderSettings};
use iced_folio::ui::sections::gallery;
use iced_folio::ui::theming::ThemeMode;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn category_filter_keeps_order_and_membership() {
    for category in CATEGORIES {
        let mut filter = CategoryFilter::new();
        filter.select(category.tag);
        let visible = filter.apply(GALLERY);

        let expected: Vec<_> = GALLERY
            .iter()
            .filter(|project| category.tag == "all" || project.has_category(category.tag))
            .collect();
        assert_eq!(visible, expected, "category {}", category.tag);
    }
}

#[test]
fn unknown_category_yields_empty_gallery() {
    let mut filter = CategoryFilter::new();
    filter.select("does-not-exist");
    assert!(filter.apply(GALLERY).is_empty());
}

#[test]
fn next_then_previous_restores_focus() {
    let items: Vec<u32> = GALLERY.iter().map(|project| project.id).collect();
    for start in 0..items.len() {
        let mut carousel = Carousel::new();
        carousel.open(items.clone(), &items[start]);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.focused_index(), Some(start));
    }
}

#[test]
fn full_cycle_returns_to_start() {
    let items: Vec<u32> = GALLERY.iter().map(|project| project.id).collect();
    let mut carousel = Carousel::new();
    carousel.open(items.clone(), &items[3]);
    for _ in 0..items.len() {
        carousel.next();
    }
    assert_eq!(carousel.focused_index(), Some(3));
}

#[test]
fn empty_subject_reports_one_error_and_builds_no_link() {
    let mut form = ContactForm::new();
    form.set_field(Field::Message, "hello".to_string());

    assert!(form.submit().is_none());
    let errors = form.errors();
    assert_eq!(errors.count(), 1);
    assert_eq!(
        errors.get(Field::Subject),
        Some(FieldError::Required(Field::Subject))
    );
    assert_eq!(form.status(), SubmitStatus::Idle);
}

#[test]
fn valid_submission_builds_mail_link_and_succeeds() {
    let mut form = ContactForm::new();
    form.set_field(Field::Subject, "Hi".to_string());
    form.set_field(Field::Message, "World".to_string());

    let draft = form.submit().expect("valid form yields a draft");
    assert_eq!(
        mailto_uri("me@example.com", &draft),
        "mailto:me@example.com?subject=Hi&body=World"
    );
    assert_eq!(form.status(), SubmitStatus::Submitting);

    form.complete(Instant::now());
    assert_eq!(form.status(), SubmitStatus::Success);
    assert_eq!(form.value(Field::Subject), "");
    assert_eq!(form.value(Field::Message), "");
}

#[test]
fn pending_asset_stays_pending_without_outcome() {
    let mut registry = AssetRegistry::new();
    assert!(registry.start_load("portrait.jpg"));
    assert!(!registry.start_load("portrait.jpg"));
    assert_eq!(registry.state("portrait.jpg"), Some(LoadState::Pending));
    assert!(registry.has_pending());
}

#[test]
fn failed_asset_ignores_late_success() {
    let mut store = AssetStore::new();
    store.request("missing.png");
    store.resolve(
        "missing.png",
        Err(AssetError::NotFound("missing.png".to_string())),
    );
    assert!(matches!(store.view("missing.png"), AssetView::Failed(_)));
    assert_eq!(store.state("missing.png"), Some(LoadState::Failed));
}

#[test]
fn gallery_category_change_closes_carousel() {
    let mut state = gallery::State::new(GALLERY, CATEGORIES, 3);
    let _ = state.handle(gallery::Message::OpenProject(GALLERY[1].id));
    assert!(state.is_open());

    let _ = state.handle(gallery::Message::SelectCategory("picwiz".to_string()));
    assert!(!state.is_open());
    assert!(state
        .visible()
        .iter()
        .all(|project| project.has_category("picwiz")));
}

#[tokio::test]
async fn local_image_loads_from_image_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    image_rs::RgbaImage::new(4, 2)
        .save(dir.path().join("tile.png"))
        .expect("Failed to write sample image");

    let settings = LoaderSettings {
        image_dir: dir.path().to_path_buf(),
        fetch_remote: false,
    };
    let data = loader::load(AssetSource::Local("tile.png".to_string()), settings)
        .await
        .expect("sample image decodes");
    assert_eq!((data.width(), data.height()), (4, 2));
}

#[tokio::test]
async fn remote_image_is_refused_when_fetching_is_off() {
    let settings = LoaderSettings {
        image_dir: std::env::temp_dir(),
        fetch_remote: false,
    };
    let result = loader::load(
        AssetSource::Remote("https://example.com/a.png".to_string()),
        settings,
    )
    .await;
    assert_eq!(result.err(), Some(AssetError::Disabled));
}

#[tokio::test]
async fn delayed_launch_opens_mail_link() {
    let recorder = Arc::new(media::RecordingLauncher::new());
    let launcher: Arc<dyn media::Launcher> = recorder.clone();

    media::launcher::open_after(
        launcher,
        "mailto:me@example.com?subject=Hi&body=World".to_string(),
        Duration::from_millis(10),
    )
    .await
    .expect("recording launcher succeeds");

    assert_eq!(
        recorder.opened(),
        vec!["mailto:me@example.com?subject=Hi&body=World".to_string()]
    );
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    french.general.theme_mode = ThemeMode::Dark;
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
}
