use crate::core::hooks::FilterRegistry;
use crate::domain::model::{Direction, Product};

/// Renders the anchor for a resolved neighbor.
///
/// The inner `link` template has `%title` and `%date` substituted by
/// literal replacement, the result is wrapped in an anchor carrying the
/// direction's relation marker and style class, and that anchor replaces
/// `%link` in the outer `format` template. Unrecognized tokens pass
/// through untouched; the title is not HTML-escaped.
pub fn render_adjacent_link(
    item: &Product,
    format: &str,
    link: &str,
    direction: Direction,
    date_format: &str,
    filters: &FilterRegistry,
) -> String {
    let title = if item.title.is_empty() {
        direction.fallback_title().to_string()
    } else {
        item.title.clone()
    };
    let title = filters.apply("title", title);

    let date = item.date.format(date_format).to_string();

    let anchor = format!(
        "<a href=\"{}\" rel=\"{}\" class=\"adjproductlink {}\">",
        item.permalink,
        direction.rel(),
        direction.rel()
    );
    let link = link.replace("%title", &title).replace("%date", &date);
    let link = format!("{}{}</a>", anchor, link);

    format.replace("%link", &link)
}
