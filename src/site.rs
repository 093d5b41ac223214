//! Static site descriptors: document metadata, theme and navigation targets.

/// Route of the N-Mapper application. It is served separately, so links to
/// it bypass the client-side router.
pub const APP_ROUTE: &str = "/app";

/// Anchor of the graph preview section.
pub const DEMO_ANCHOR: &str = "#demo";

pub struct OpenGraph {
	pub title: &'static str,
	pub description: &'static str,
	pub kind: &'static str,
	pub locale: &'static str,
	pub site_name: &'static str,
}

pub struct TwitterCard {
	pub card: &'static str,
	pub title: &'static str,
	pub description: &'static str,
}

pub struct Font {
	pub family: &'static str,
	pub weights: &'static [u16],
	pub css_variable: &'static str,
}

impl Font {
	/// `family=...:wght@...` fragment of a Google Fonts css2 query.
	pub fn query(&self) -> String {
		let weights = self
			.weights
			.iter()
			.map(u16::to_string)
			.collect::<Vec<_>>()
			.join(";");
		format!("family={}:wght@{}", self.family.replace(' ', "+"), weights)
	}
}

/// Everything the document head is built from.
pub struct SiteMeta {
	pub title: &'static str,
	pub description: &'static str,
	pub keywords: &'static [&'static str],
	pub author: &'static str,
	pub open_graph: OpenGraph,
	pub twitter: TwitterCard,
	pub viewport: &'static str,
	pub theme_color: &'static str,
	pub lang: &'static str,
	pub fonts: &'static [Font],
}

impl SiteMeta {
	pub fn keywords_content(&self) -> String {
		self.keywords.join(", ")
	}

	/// Inline style declaring one CSS custom property per font.
	pub fn font_variables(&self) -> String {
		self.fonts
			.iter()
			.map(|f| format!("{}: '{}';", f.css_variable, f.family))
			.collect::<Vec<_>>()
			.join(" ")
	}

	pub fn fonts_href(&self) -> String {
		let families = self
			.fonts
			.iter()
			.map(Font::query)
			.collect::<Vec<_>>()
			.join("&");
		format!("https://fonts.googleapis.com/css2?{families}&display=swap")
	}
}

pub const SITE: SiteMeta = SiteMeta {
	title: "N-Mapper | Learning Made Efficient",
	description: "Play School Like A Game — Navigate your Canvas courses as a 3D knowledge graph with voice-first navigation.",
	keywords: &[
		"Canvas LMS",
		"knowledge graph",
		"3D visualization",
		"voice navigation",
		"student tools",
		"learning efficiency",
	],
	author: "N-Mapper Team",
	open_graph: OpenGraph {
		title: "N-Mapper | Learning Made Efficient",
		description: "Navigate your Canvas courses as a 3D knowledge graph with voice-first control.",
		kind: "website",
		locale: "en_US",
		site_name: "N-Mapper",
	},
	twitter: TwitterCard {
		card: "summary_large_image",
		title: "N-Mapper | Learning Made Efficient",
		description: "Play School Like A Game — Navigate your Canvas courses as a 3D knowledge graph.",
	},
	viewport: "width=device-width, initial-scale=1",
	theme_color: "#05070d",
	lang: "en",
	fonts: &[
		Font {
			family: "Space Grotesk",
			weights: &[300, 400, 500, 600, 700],
			css_variable: "--font-sans",
		},
		Font {
			family: "Space Mono",
			weights: &[400, 700],
			css_variable: "--font-mono",
		},
	],
};

/// A call-to-action target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
	pub label: &'static str,
	pub href: &'static str,
}

impl NavLink {
	/// Links that leave this page for the separately served app.
	pub fn is_external(&self) -> bool {
		self.href.starts_with(APP_ROUTE)
	}

	/// `rel` attribute value; `external` keeps the router from handling the click.
	pub fn rel(&self) -> Option<&'static str> {
		self.is_external().then_some("external")
	}
}

pub const LAUNCH_DASHBOARD: NavLink = NavLink {
	label: "Launch Dashboard",
	href: APP_ROUTE,
};

pub const SEE_IT_IN_ACTION: NavLink = NavLink {
	label: "See it in action",
	href: APP_ROUTE,
};

pub const GET_STARTED: NavLink = NavLink {
	label: "Get Started Free",
	href: APP_ROUTE,
};

pub const WATCH_DEMO: NavLink = NavLink {
	label: "Watch Demo",
	href: DEMO_ANCHOR,
};

/// Every call-to-action that leads into the product.
pub const PRODUCT_LINKS: [NavLink; 3] = [LAUNCH_DASHBOARD, SEE_IT_IN_ACTION, GET_STARTED];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_title_and_description() {
		assert_eq!(SITE.title, "N-Mapper | Learning Made Efficient");
		assert_eq!(
			SITE.description,
			"Play School Like A Game — Navigate your Canvas courses as a 3D knowledge graph with voice-first navigation."
		);
	}

	#[test]
	fn test_social_previews() {
		assert_eq!(SITE.open_graph.title, SITE.title);
		assert_eq!(SITE.open_graph.site_name, "N-Mapper");
		assert_eq!(SITE.open_graph.locale, "en_US");
		assert_eq!(SITE.twitter.card, "summary_large_image");
		assert_eq!(
			SITE.twitter.description,
			"Play School Like A Game — Navigate your Canvas courses as a 3D knowledge graph."
		);
	}

	#[test]
	fn test_keywords_content() {
		assert_eq!(
			SITE.keywords_content(),
			"Canvas LMS, knowledge graph, 3D visualization, voice navigation, student tools, learning efficiency"
		);
	}

	#[test]
	fn test_theme_and_viewport() {
		assert_eq!(SITE.theme_color, "#05070d");
		assert_eq!(SITE.viewport, "width=device-width, initial-scale=1");
	}

	#[test]
	fn test_fonts_href() {
		assert_eq!(
			SITE.fonts_href(),
			"https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@300;400;500;600;700&family=Space+Mono:wght@400;700&display=swap"
		);
	}

	#[test]
	fn test_font_variables() {
		assert_eq!(
			SITE.font_variables(),
			"--font-sans: 'Space Grotesk'; --font-mono: 'Space Mono';"
		);
	}

	#[test]
	fn test_product_links_resolve_to_app() {
		for link in PRODUCT_LINKS {
			assert_eq!(link.href, "/app", "{} should open the app", link.label);
			assert!(link.is_external());
			assert_eq!(link.rel(), Some("external"));
		}
	}

	#[test]
	fn test_watch_demo_stays_on_page() {
		assert_eq!(WATCH_DEMO.href, "#demo");
		assert!(!WATCH_DEMO.is_external());
		assert_eq!(WATCH_DEMO.rel(), None);
	}
}
