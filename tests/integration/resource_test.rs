//! Resource construction integration tests

use crate::{assert_err, assert_ok};
use pretty_assertions::assert_eq;
use xfmarkup::shared::element::{ResourceKind, ResourceOptions};
use xfmarkup::shared::{ElementError, E};

#[test]
fn test_raw_bytes_become_data_uri() {
    let image = assert_ok!(E::image(ResourceOptions::new().raw(b"\x01\x02".to_vec(), "image/png")));
    let resource = image.resource().unwrap();
    assert_eq!(resource.src, "data:image/png;base64,AQI=");
}

#[test]
fn test_url_source() {
    let audio = assert_ok!(E::audio(
        ResourceOptions::new()
            .url("https://x/a.mp3")
            .cache(true)
            .timeout("30s")
    ));
    assert_eq!(
        audio.render(),
        r#"<audio src="https://x/a.mp3" cache timeout="30s" />"#
    );
}

#[cfg(unix)]
#[test]
fn test_absolute_path_source() {
    let file = assert_ok!(E::file(ResourceOptions::new().path("/tmp/report.pdf")));
    assert_eq!(file.resource().unwrap().src, "file:///tmp/report.pdf");
}

#[test]
fn test_relative_path_fails() {
    assert_err!(
        ResourceOptions::new().path("report.pdf").build(ResourceKind::File),
        ElementError::InvalidPath { .. }
    );
}

#[test]
fn test_no_source_fails() {
    assert_err!(
        E::video(ResourceOptions::new()),
        ElementError::InvalidArguments { type_name: "Video", .. }
    );
}

#[test]
fn test_two_sources_fail() {
    assert_err!(
        E::image(
            ResourceOptions::new()
                .url("https://x/a.png")
                .raw(vec![1u8], "image/png")
        ),
        ElementError::InvalidArguments { type_name: "Image", .. }
    );
}

#[test]
fn test_extra_flags_and_values() {
    let video = assert_ok!(E::video(
        ResourceOptions::new()
            .url("https://x/v.mp4")
            .flag("autoplay")
            .extra("poster", "https://x/p.png")
    ));
    assert_eq!(
        video.render(),
        r#"<video src="https://x/v.mp4" autoplay poster="https://x/p.png" />"#
    );
}
