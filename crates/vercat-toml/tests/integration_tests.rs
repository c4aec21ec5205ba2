//! Integration tests for the TOML loader using the music player catalog fixture.

use vercat_core::{CatalogError, EntryKind};
use vercat_toml::parse_version_catalog;

fn fixture() -> vercat_core::Catalog {
    let content = include_str!("fixtures/libs.versions.toml");
    parse_version_catalog(content).unwrap()
}

#[test]
fn test_fixture_entry_counts() {
    let catalog = fixture();
    assert_eq!(catalog.aliases(EntryKind::Version).count(), 25);
    assert_eq!(catalog.aliases(EntryKind::Library).count(), 16);
    assert_eq!(catalog.aliases(EntryKind::Plugin).count(), 3);
    assert_eq!(catalog.aliases(EntryKind::Bundle).count(), 1);
}

#[test]
fn test_fixture_versions() {
    let catalog = fixture();
    let versions = catalog.resolver().namespace("app");

    let build = versions.namespace("build");
    assert_eq!(build.resolve_version("minimumSDK").unwrap(), "23");
    assert_eq!(build.resolve_version("compileSDKVersion").unwrap(), "35");
    assert_eq!(build.resolve_version("javaVersion").unwrap(), "VERSION_17");

    let version = versions.namespace("version");
    assert_eq!(
        version.resolve_version("appId").unwrap(),
        "com.simplemobiletools.musicplayer"
    );
    assert_eq!(version.resolve_version("versionName").unwrap(), "5.18.3");

    let root = catalog.resolver();
    assert_eq!(root.resolve_version("desugar.jdk.libs").unwrap(), "2.0.3");
    assert_eq!(root.resolve_version("gradlePlugins.agp").unwrap(), "8.1.4");
    assert_eq!(root.resolve_version("m3uParser").unwrap(), "1.3.0");
}

#[test]
fn test_fixture_libraries() {
    let catalog = fixture();
    let listing: Vec<String> = catalog
        .aliases(EntryKind::Library)
        .map(|alias| {
            let r = catalog.resolver();
            let module = r.resolve_module(alias).unwrap();
            let version = r.resolve_module_version(alias).unwrap().unwrap_or_default();
            format!("{alias} -> {module}:{version}")
        })
        .collect();

    insta::assert_snapshot!(listing.join("\n"), @r"
    androidx.constraintlayout -> androidx.constraintlayout:constraintlayout:2.1.4
    androidx.lifecycle.process -> androidx.lifecycle:lifecycle-process:2.6.1
    androidx.media -> androidx.media:media:1.6.0
    androidx.media3.exoplayer -> androidx.media3:media3-exoplayer:1.5.1
    androidx.media3.session -> androidx.media3:media3-session:1.5.1
    androidx.room.compiler -> androidx.room:room-compiler:2.5.2
    androidx.room.ktx -> androidx.room:room-ktx:2.5.2
    androidx.room.runtime -> androidx.room:room-runtime:2.5.2
    androidx.swiperefreshlayout -> androidx.swiperefreshlayout:swiperefreshlayout:1.1.0
    autofittextview -> me.grantland:autofittextview:0.2.1
    desugar.jdk.libs -> com.android.tools:desugar_jdk_libs:2.0.3
    eventbus -> org.greenrobot:eventbus:3.3.1
    jaudiotagger -> net.jthink:jaudiotagger:2.2.5
    lottie -> com.airbnb.android:lottie:6.1.0
    m3u.parser -> com.github.bjoernpetersen:m3u-parser:1.3.0
    simple.mobile.tools.commons -> com.github.SimpleMobileTools:Simple-Commons:6a7777d740
    ");
}

#[test]
fn test_fixture_room_bundle() {
    let catalog = fixture();
    let modules = catalog.resolver().resolve_bundle("room").unwrap();
    let notations: Vec<_> = modules.iter().map(|m| m.notation()).collect();
    assert_eq!(
        notations,
        vec!["androidx.room:room-ktx", "androidx.room:room-runtime"]
    );
}

#[test]
fn test_fixture_namespace_lookup() {
    let catalog = fixture();
    let root = catalog.resolver();
    assert_eq!(
        root.namespace("androidx.room").resolve_module("compiler").unwrap(),
        root.resolve_module("androidx.room.compiler").unwrap()
    );
    assert_eq!(
        root.namespace("androidx").children(EntryKind::Library),
        vec![
            "constraintlayout",
            "lifecycle",
            "media",
            "media3",
            "room",
            "swiperefreshlayout"
        ]
    );
}

#[test]
fn test_fixture_plugins() {
    let catalog = fixture();
    let r = catalog.resolver();
    assert_eq!(r.resolve_plugin("android").unwrap().id, "com.android.application");
    assert_eq!(
        r.resolve_plugin("kotlinAndroid").unwrap().id,
        "org.jetbrains.kotlin.android"
    );
    assert_eq!(r.resolve_plugin_version("android").unwrap().as_deref(), Some("8.1.4"));
    assert_eq!(
        r.resolve_plugin_version("ksp").unwrap().as_deref(),
        Some("1.9.10-1.0.13")
    );
}

#[test]
fn test_fixture_sections_are_separate_namespaces() {
    let catalog = fixture();
    let r = catalog.resolver();
    // `room` is both a version and a bundle, `ksp` both a version and a plugin
    assert_eq!(r.resolve_version("room").unwrap(), "2.5.2");
    assert!(r.resolve_bundle("room").is_ok());
    assert_eq!(r.resolve_version("ksp").unwrap(), "1.9.10-1.0.13");
    assert!(r.resolve_plugin("ksp").is_ok());

    assert!(matches!(
        r.resolve_plugin("room"),
        Err(CatalogError::WrongKind { .. })
    ));
    assert!(matches!(
        r.resolve_module("kotlin"),
        Err(CatalogError::WrongKind { found: EntryKind::Version, .. })
    ));
    assert!(matches!(
        r.resolve_version("androidx.room"),
        Err(CatalogError::NotFound { .. })
    ));
}

#[test]
fn test_catalog_shared_across_threads() {
    let catalog = std::sync::Arc::new(fixture());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = std::sync::Arc::clone(&catalog);
            std::thread::spawn(move || {
                catalog
                    .resolver()
                    .namespace("androidx.media3")
                    .resolve_module("session")
                    .map(|m| m.artifact.clone())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), "media3-session");
    }
}
