//! Catalog tour
//!
//! Run with:
//! `cargo run -p faro_i18n --example catalog_tour`

use faro_i18n::{args, tr, LocaleTag, Localization};

const APP_CATALOG_EN: &str = r#"{
    "greeting": "Hello, {name}!",
    "inbox.unread": {
        "one": "{count} unread message",
        "other": "{count} unread messages"
    }
}"#;

const APP_CATALOG_FR: &str = r#"{
    "greeting": "Bonjour, {name} !",
    "inbox.unread": {
        "one": "{count} message non lu",
        "other": "{count} messages non lus"
    }
}"#;

fn main() -> Result<(), faro_i18n::I18nError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Register app catalogs on top of the bundled toolkit strings.
    faro_i18n::register_catalog(APP_CATALOG_EN.as_bytes(), "app.en.json")?;
    faro_i18n::register_catalog_for_locale(
        APP_CATALOG_FR.as_bytes(),
        &LocaleTag::parse("fr")?,
    )?;

    println!("startup locale: {}", faro_i18n::current_locale());
    println!("{}", tr!("dialog.cancel"));
    println!("{}", tr!("greeting", { name: "Ada" }));
    for count in [0i64, 1, 2] {
        println!("{}", faro_i18n::translate_plural("inbox.unread", count));
    }

    // Manual locale switch, e.g. from an app settings screen.
    faro_i18n::set_locale("fr");
    println!("{}", tr!("greeting", { name: "Ada" }));
    for count in [0i64, 1, 2] {
        println!("{}", faro_i18n::translate_plural("inbox.unread", count));
    }

    // An explicitly scoped instance, independent of the global state.
    let scoped = Localization::new(LocaleTag::parse("en")?);
    scoped.register_catalog_for_locale(br#"{"scoped.note": "only here"}"#, &LocaleTag::parse("en")?)?;
    println!("{}", scoped.translate("scoped.note"));
    println!(
        "{}",
        scoped.translate_key_with("missing", "fell back for {who}", &args! { who: "the demo" })
    );

    Ok(())
}
