use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::site::SITE;

/// Document head: title, description, social previews, theme and fonts.
#[component]
pub fn SeoMeta() -> impl IntoView {
	view! {
		<Title text=SITE.title />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content=SITE.viewport />
		<Meta name="theme-color" content=SITE.theme_color />
		<Meta name="description" content=SITE.description />
		<Meta name="keywords" content=SITE.keywords_content() />
		<Meta name="author" content=SITE.author />

		// Open Graph
		<Meta property="og:title" content=SITE.open_graph.title />
		<Meta property="og:description" content=SITE.open_graph.description />
		<Meta property="og:type" content=SITE.open_graph.kind />
		<Meta property="og:locale" content=SITE.open_graph.locale />
		<Meta property="og:site_name" content=SITE.open_graph.site_name />

		// Twitter
		<Meta name="twitter:card" content=SITE.twitter.card />
		<Meta name="twitter:title" content=SITE.twitter.title />
		<Meta name="twitter:description" content=SITE.twitter.description />

		<Link rel="preconnect" href="https://fonts.googleapis.com" />
		<Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
		<Link rel="stylesheet" href=SITE.fonts_href() />
	}
}
