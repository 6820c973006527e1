use super::{Element, RenderSurface};

/// Stage the profile picture in the container.
///
/// `avatar_url` is taken as-is; a bad URL shows up as a broken image
/// at view time rather than an error here.
pub fn render_profile_picture(surface: &mut RenderSurface, avatar_url: &str, name: &str) {
    let picture = Element::new("img")
        .attr("src", avatar_url)
        .attr("class", "profile-picture")
        .attr("alt", &format!("{} Profile Picture", name));

    surface.append_container(picture);
}

/// Point the page icon at the profile picture.
///
/// Appends a fresh link each call; an earlier icon link is not
/// replaced.
pub fn render_favicon(surface: &mut RenderSurface, avatar_url: &str) {
    let icon = Element::new("link")
        .attr("rel", "shortcut icon")
        .attr("href", avatar_url);

    surface.append_head(icon);
}

/// Stage the `@login` nickname label in the container.
pub fn render_nickname(surface: &mut RenderSurface, login: &str) {
    let nickname = Element::new("p")
        .text(&format!("@{}", login))
        .attr("class", "github-nickname")
        .attr("aria-label", login);

    surface.append_container(nickname);
}
