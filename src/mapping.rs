//! Builders that flatten wire items into the view shapes the page renders.

use url::Url;

use crate::content::ProjectItem;
use crate::page::{CardImage, ProjectCard};
use crate::richtext;

/// Split the CMS's comma-separated tag string into display labels.
///
/// Tokens are trimmed and empty tokens are dropped, so an empty or
/// whitespace-only input yields no labels rather than one blank pill.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Flatten one project item into its card view. `asset_base` is the public
/// base URL; the CMS serves image paths relative to it.
pub fn card_from_item(item: &ProjectItem, asset_base: &Url) -> ProjectCard {
    let attrs = &item.attributes;
    let image = attrs
        .thumbnail
        .as_ref()
        .and_then(|rel| rel.data.as_ref())
        .map(|data| CardImage {
            src: asset_url(asset_base, &data.attributes.url),
            alt: data
                .attributes
                .alternative_text
                .clone()
                .unwrap_or_else(|| attrs.title.clone()),
        });
    ProjectCard {
        id: item.id,
        title: attrs.title.clone(),
        description: richtext::description_text(attrs.description.as_deref()),
        tags: split_tags(&attrs.tags),
        image,
        link: Some(attrs.project_link.clone()).filter(|l| !l.is_empty()),
    }
}

fn asset_url(base: &Url, relative: &str) -> String {
    match base.join(relative) {
        Ok(url) => url.to_string(),
        // join only fails on pathological inputs; fall back to plain concat
        Err(_) => format!("{}{}", base.as_str().trim_end_matches('/'), relative),
    }
}
