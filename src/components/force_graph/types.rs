use std::collections::HashSet;

use thiserror::Error;

/// Category of a node in the course graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Course,
	Module,
	Assignment,
}

impl NodeKind {
	/// Size value fed to the renderer; the drawn radius grows with its cube root.
	pub fn val(self) -> f64 {
		match self {
			NodeKind::Course => 12.0,
			NodeKind::Module => 6.0,
			NodeKind::Assignment => 3.0,
		}
	}
}

#[derive(Clone, Debug)]
pub struct GraphNode {
	pub id: String,
	pub name: String,
	pub kind: NodeKind,
	pub color: String,
}

#[derive(Clone, Debug)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
}

/// How a link relates its endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkRelation {
	/// course -> module or module -> assignment
	Containment,
	/// course -> course
	Prerequisite,
}

impl GraphLink {
	pub fn relation(&self, data: &GraphData) -> Option<LinkRelation> {
		let source = data.node(&self.source)?;
		let target = data.node(&self.target)?;
		match (source.kind, target.kind) {
			(NodeKind::Course, NodeKind::Module) | (NodeKind::Module, NodeKind::Assignment) => {
				Some(LinkRelation::Containment)
			}
			(NodeKind::Course, NodeKind::Course) => Some(LinkRelation::Prerequisite),
			_ => None,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphDataError {
	#[error("duplicate node id `{0}`")]
	DuplicateNode(String),
	#[error("link {from} -> {to} references unknown node `{missing}`")]
	DanglingLink {
		from: String,
		to: String,
		missing: String,
	},
}

#[derive(Clone, Debug, Default)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl GraphData {
	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn count_kind(&self, kind: NodeKind) -> usize {
		self.nodes.iter().filter(|n| n.kind == kind).count()
	}

	/// Checks id uniqueness and that every link endpoint exists.
	pub fn validate(&self) -> Result<(), GraphDataError> {
		let mut ids = HashSet::with_capacity(self.nodes.len());
		for node in &self.nodes {
			if !ids.insert(node.id.as_str()) {
				return Err(GraphDataError::DuplicateNode(node.id.clone()));
			}
		}
		for link in &self.links {
			for end in [&link.source, &link.target] {
				if !ids.contains(end.as_str()) {
					return Err(GraphDataError::DanglingLink {
						from: link.source.clone(),
						to: link.target.clone(),
						missing: end.clone(),
					});
				}
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, kind: NodeKind) -> GraphNode {
		GraphNode {
			id: id.into(),
			name: id.to_uppercase(),
			kind,
			color: "#ffffff".into(),
		}
	}

	fn link(source: &str, target: &str) -> GraphLink {
		GraphLink {
			source: source.into(),
			target: target.into(),
		}
	}

	#[test]
	fn test_kind_sizes_are_ordered() {
		assert!(NodeKind::Course.val() > NodeKind::Module.val());
		assert!(NodeKind::Module.val() > NodeKind::Assignment.val());
	}

	#[test]
	fn test_validate_accepts_consistent_graph() {
		let data = GraphData {
			nodes: vec![node("a", NodeKind::Course), node("b", NodeKind::Module)],
			links: vec![link("a", "b")],
		};
		assert_eq!(data.validate(), Ok(()));
	}

	#[test]
	fn test_validate_rejects_duplicate_id() {
		let data = GraphData {
			nodes: vec![node("a", NodeKind::Course), node("a", NodeKind::Module)],
			links: vec![],
		};
		assert_eq!(
			data.validate(),
			Err(GraphDataError::DuplicateNode("a".into()))
		);
	}

	#[test]
	fn test_validate_rejects_dangling_link() {
		let data = GraphData {
			nodes: vec![node("a", NodeKind::Course)],
			links: vec![link("a", "ghost")],
		};
		let err = data.validate().unwrap_err();
		assert_eq!(
			err,
			GraphDataError::DanglingLink {
				from: "a".into(),
				to: "ghost".into(),
				missing: "ghost".into(),
			}
		);
		assert!(err.to_string().contains("ghost"));
	}

	#[test]
	fn test_relation_classifies_links() {
		let data = GraphData {
			nodes: vec![
				node("c1", NodeKind::Course),
				node("c2", NodeKind::Course),
				node("m1", NodeKind::Module),
			],
			links: vec![link("c1", "c2"), link("c1", "m1"), link("c1", "nope")],
		};
		assert_eq!(
			data.links[0].relation(&data),
			Some(LinkRelation::Prerequisite)
		);
		assert_eq!(
			data.links[1].relation(&data),
			Some(LinkRelation::Containment)
		);
		assert_eq!(data.links[2].relation(&data), None);
	}

	#[test]
	fn test_relation_rejects_reversed_and_sideways_links() {
		let data = GraphData {
			nodes: vec![
				node("c", NodeKind::Course),
				node("m1", NodeKind::Module),
				node("m2", NodeKind::Module),
				node("a1", NodeKind::Assignment),
				node("a2", NodeKind::Assignment),
			],
			links: vec![
				link("a1", "c"),
				link("m1", "c"),
				link("a1", "m1"),
				link("m1", "m2"),
				link("a1", "a2"),
				link("c", "a1"),
			],
		};
		for l in &data.links {
			assert_eq!(l.relation(&data), None, "{} -> {}", l.source, l.target);
		}
		let module_to_assignment = link("m2", "a2");
		assert_eq!(
			module_to_assignment.relation(&data),
			Some(LinkRelation::Containment)
		);
	}
}
