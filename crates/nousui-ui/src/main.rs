#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Binary entry for the NousUI Lab front-end.
//!
//! The app needs a browser (IndexedDB, `localStorage`, the DOM), so a native
//! build only explains how to serve it.

#[cfg(target_arch = "wasm32")]
fn main() {
    nousui_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn native_notice() -> String {
    format!(
        "nousui-ui runs in the browser only.\n\
         Serve it with `trunk serve crates/nousui-ui/index.html`; the catalog is kept in \
         the IndexedDB database `{}` (store `{}`).\n",
        nousui_catalog::schema::DB_NAME,
        nousui_catalog::schema::STORE_NAME,
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    std::io::stderr().lock().write_all(native_notice().as_bytes())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn notice_points_at_trunk_and_the_catalog_database() {
        let notice = native_notice();
        assert!(notice.contains("trunk serve"));
        assert!(notice.contains(nousui_catalog::schema::DB_NAME));
        assert!(notice.ends_with('\n'));
    }
}
