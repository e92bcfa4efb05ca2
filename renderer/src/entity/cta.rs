//! Fixed promotional templates for `CTA_BOX` and `CTA_IMAGE` entities.
//!
//! The markup, indentation included, is emitted exactly as laid out below.

use draft::entity::Entity;

use super::attr;

/// Gradient strip painted behind the call-to-action button.
const BUTTON_BACKGROUND: &str = "data:image/jpeg;base64,/9j/4QAYRXhpZgAASUkqAAgAAAAAAAAAAAAAAP/sABFEdWNreQABAAQAAABRAAD/4QMraHR0cDovL25zLmFkb2JlLmNvbS94YXAvMS4wLwA8P3hwYWNrZXQgYmVnaW49Iu+7vyIgaWQ9Ilc1TTBNcENlaGlIenJlU3pOVGN6a2M5ZCI/PiA8eDp4bXBtZXRhIHhtbG5zOng9ImFkb2JlOm5zOm1ldGEvIiB4OnhtcHRrPSJBZG9iZSBYTVAgQ29yZSA1LjMtYzAxMSA2Ni4xNDU2NjEsIDIwMTIvMDIvMDYtMTQ6NTY6MjcgICAgICAgICI+IDxyZGY6UkRGIHhtbG5zOnJkZj0iaHR0cDovL3d3dy53My5vcmcvMTk5OS8wMi8yMi1yZGYtc3ludGF4LW5zIyI+IDxyZGY6RGVzY3JpcHRpb24gcmRmOmFib3V0PSIiIHhtbG5zOnhtcE1NPSJodHRwOi8vbnMuYWRvYmUuY29tL3hhcC8xLjAvbW0vIiB4bWxuczpzdFJlZj0iaHR0cDovL25zLmFkb2JlLmNvbS94YXAvMS4wL3NUeXBlL1Jlc291cmNlUmVmIyIgeG1sbnM6eG1wPSJodHRwOi8vbnMuYWRvYmUuY29tL3hhcC8xLjAvIiB4bXBNTTpEb2N1bWVudElEPSJ4bXAuZGlkOkFERjQ4MDg2M0Y5RjExRTI4RUE2RDk1NUQ4OEZCQ0RGIiB4bXBNTTpJbnN0YW5jZUlEPSJ4bXAuaWlkOkFERjQ4MDg1M0Y5RjExRTI4RUE2RDk1NUQ4OEZCQ0RGIiB4bXA6Q3JlYXRvclRvb2w9IkFkb2JlIFBob3Rvc2hvcCBDUzYgKFdpbmRvd3MpIj4gPHhtcE1NOkRlcml2ZWRGcm9tIHN0UmVmOmluc3RhbmNlSUQ9InhtcC5paWQ6QkFBNDg0QjgzRjk5MTFFMkExOUVGOUNCNjVGQTQ3RUEiIHN0UmVmOmRvY3VtZW50SUQ9InhtcC5kaWQ6QkFBNDg0QjkzRjk5MTFFMkExOUVGOUNCNjVGQTQ3RUEiLz4gPC9yZGY6RGVzY3JpcHRpb24+IDwvcmRmOlJERj4gPC94OnhtcG1ldGE+IDw/eHBhY2tldCBlbmQ9InIiPz7/7gAOQWRvYmUAZMAAAAAB/9sAhAACAgICAgICAgICAwICAgMEAwICAwQEBAQEBAQEBgQFBQUFBAYGBwcHBwcGCQkKCgkJDAwMDAwMDAwMDAwMDAwMAQIDAwUEBQkGBgkNCggKDQ8ODg4ODw8MDAwMDA8PDAwMDAwMDwwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAz/wAARCABiAAQDAREAAhEBAxEB/8QAngABAQADAAAAAAAAAAAAAAAABgUDBwgBAAICAwEAAAAAAAAAAAAAAAQFAwgBAgcJEAABAQUEAwkRAQAAAAAAAAAREgABITETMmIzFAJSREFhkaEiQiNTJHGBscFygpLC0gNjc4MFBhYXRxEAAQEFBQUCDwAAAAAAAAAA8AARQXHhEgEhYdETMZGhwZJR8YECIjJCUmKCkwREVAUVFv/aAAwDAQACEQMRAD8A6a/pH5slP7N9yGpW0szPEHd5qTuXG81P6T8p9x4++2mE25qvv7H5j17d9y1rX93IOs1DtQUmsniAlC4yKi082A/qSaodAmoGddUCuViz7QeuE5QSmULjMtK7hhCfb1IVtwyBNGM1oqJfrp2g2Kon5olC4zai02Qm3ND1DoE0dzb5KcTVSe0fNA7wEoXWZ6WWEB+9QNHQJqDW9LETCtq1BxJEoXWYU2myE+9D1DoE1jouXWHS4ij0VkVD5MEn2mzXcx3GE+5astYx3GBJWMtFYebZhQkapJJiDON5hKx8B25EMHhgkmVeZuON8AFdTgilU432U6mWMJsyU9I8MEkyPLVuCqdnHW8MUqnG+y3WuGwnz8lEsuGhgkmV0sSBxaodlSo1vGkzjfZVqWbPB7UB3Sp6R4YKzlnhSXE1FKflU21kjfSrfvsFWelDk1mSJYPXaXM/zy39PG8HrtaN30Wz3jkul/C5r//Z";

pub(super) fn render_cta_box(entity: &Entity, _text: &str) -> String {
    format!(
        r#"
    <div id="ctabox-root" style="position: relative; background-color: white; padding: 1px 16px 16px 16px; margin: 0 auto;">
      <h3 style="overflow: hidden; display: -webkit-box; line-clamp: 2; box-orient: vertical; -webkit-line-clamp: 2; -webkit-box-orient: vertical; letter-spacing: -0.015em; font-size: 21px; margin-top: 20px; margin-bottom: 10px; font-family: inherit; font-weight: 400; line-height: 1.5384616; color: inherit;">{title}</h3>
      <p style="overflow: hidden; display: -webkit-box; line-clamp: 4; box-orient: vertical; -webkit-line-clamp: 4; -webkit-box-orient: vertical; margin: 0 0 10px;">{text}</p>
      <a href="{url}" target="cta" style="
        display: -webkit-box;
        background-color: red;
        box-shadow: 0 5px 0 darkred;
        color: white;
        padding: 1em 1.5em;
        position: relative;
        text-decoration: none;
        display: block;
        margin: 20px 0 0 0;
        font-size: 18px;
        line-height: 18px;
        text-shadow: 0 1px 0 #308c05;
        text-align: center;
        text-transform: uppercase;
        font-weight: bold;
        padding: 14px 0;
        color: #fff;
        background-image: url({background});
        background-position: 0 0;
        background-repeat: repeat-x;
        border-radius: 0;
        box-shadow: 0 7px 5px -6px #999;
        white-space: nowrap;
        overflow: hidden;
        text-overflow: ellipsis;
      ">{button}</a>
    </div>"#,
        title = attr(entity, "ctaTitle"),
        text = attr(entity, "ctaText"),
        url = attr(entity, "url"),
        background = BUTTON_BACKGROUND,
        button = attr(entity, "ctaButtonText"),
    )
}

pub(super) fn render_cta_image(entity: &Entity, _text: &str) -> String {
    format!(
        r#"
      <a id="ctaimage-root" href="{link}" target="cta" style="overflow: auto; display: block; text-align: center;">
        {image}
      </a>"#,
        link = attr(entity, "linkUrl"),
        image = super::render_image(entity, ""),
    )
}
