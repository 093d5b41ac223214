//! Course graph shown in the landing page preview.

use crate::components::force_graph::{GraphData, GraphLink, GraphNode, NodeKind};

const COURSES: &[(&str, &str, &str)] = &[
	("math18", "MATH 18", "#ef4444"),
	("cse101", "CSE 101", "#3b82f6"),
	("cogs10", "COGS 10", "#a855f7"),
	("phys2a", "PHYS 2A", "#f97316"),
	("cse12", "CSE 12", "#06b6d4"),
	("math20c", "MATH 20C", "#ec4899"),
];

/// (id, name, owning course)
const MODULES: &[(&str, &str, &str)] = &[
	("math18-m1", "Linear Algebra", "math18"),
	("math18-m2", "Eigenvalues", "math18"),
	("math18-m3", "Vector Spaces", "math18"),
	("cse101-m1", "Algorithms", "cse101"),
	("cse101-m2", "Data Structures", "cse101"),
	("cse101-m3", "Graph Theory", "cse101"),
	("cogs10-m1", "Cognition", "cogs10"),
	("cogs10-m2", "Memory", "cogs10"),
	("phys2a-m1", "Mechanics", "phys2a"),
	("phys2a-m2", "Kinematics", "phys2a"),
	("cse12-m1", "Java Basics", "cse12"),
	("cse12-m2", "OOP", "cse12"),
	("math20c-m1", "Multivariable", "math20c"),
	("math20c-m2", "Integrals", "math20c"),
];

/// (id, name, owning module)
const ASSIGNMENTS: &[(&str, &str, &str)] = &[
	("math18-a1", "HW 1", "math18-m1"),
	("math18-a2", "Midterm", "math18-m2"),
	("cse101-a1", "PA 1", "cse101-m1"),
	("cse101-a2", "PA 2", "cse101-m2"),
	("cogs10-a1", "Essay 1", "cogs10-m1"),
	("phys2a-a1", "Lab 1", "phys2a-m1"),
	("cse12-a1", "PA 1", "cse12-m1"),
	("math20c-a1", "Quiz 1", "math20c-m1"),
];

/// (prerequisite, course)
const PREREQUISITES: &[(&str, &str)] = &[("math18", "math20c"), ("cse12", "cse101")];

fn course_color(course: &str) -> &'static str {
	COURSES
		.iter()
		.find(|(id, _, _)| *id == course)
		.map(|(_, _, color)| *color)
		.unwrap_or("#94a3b8")
}

fn link(source: &str, target: &str) -> GraphLink {
	GraphLink {
		source: source.to_string(),
		target: target.to_string(),
	}
}

/// Builds the demo graph: six courses with their modules and assignments,
/// containment links, then prerequisite links between courses. Modules and
/// assignments take their course's color.
pub fn demo_graph() -> GraphData {
	let mut nodes = Vec::with_capacity(COURSES.len() + MODULES.len() + ASSIGNMENTS.len());
	let mut links = Vec::with_capacity(MODULES.len() + ASSIGNMENTS.len() + PREREQUISITES.len());

	for &(id, name, color) in COURSES {
		nodes.push(GraphNode {
			id: id.into(),
			name: name.into(),
			kind: NodeKind::Course,
			color: color.into(),
		});
	}
	for &(id, name, course) in MODULES {
		nodes.push(GraphNode {
			id: id.into(),
			name: name.into(),
			kind: NodeKind::Module,
			color: course_color(course).into(),
		});
		links.push(link(course, id));
	}
	for &(id, name, module) in ASSIGNMENTS {
		// Ids are prefixed with their course id.
		let course = module.split('-').next().unwrap_or(module);
		nodes.push(GraphNode {
			id: id.into(),
			name: name.into(),
			kind: NodeKind::Assignment,
			color: course_color(course).into(),
		});
		links.push(link(module, id));
	}
	for &(prerequisite, course) in PREREQUISITES {
		links.push(link(prerequisite, course));
	}

	GraphData { nodes, links }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::LinkRelation;

	#[test]
	fn test_demo_graph_is_consistent() {
		assert_eq!(demo_graph().validate(), Ok(()));
	}

	#[test]
	fn test_node_counts_by_kind() {
		let data = demo_graph();
		assert_eq!(data.count_kind(NodeKind::Course), 6);
		assert_eq!(data.count_kind(NodeKind::Module), 14);
		assert_eq!(data.count_kind(NodeKind::Assignment), 8);
		assert_eq!(data.nodes.len(), 28);
	}

	#[test]
	fn test_link_counts_by_relation() {
		let data = demo_graph();
		let count = |relation| {
			data.links
				.iter()
				.filter(|l| l.relation(&data) == Some(relation))
				.count()
		};
		assert_eq!(count(LinkRelation::Containment), 22);
		assert_eq!(count(LinkRelation::Prerequisite), 2);
		assert_eq!(data.links.len(), 24);
	}

	#[test]
	fn test_children_share_course_color() {
		let data = demo_graph();
		let color = |id: &str| data.node(id).map(|n| n.color.clone());
		assert_eq!(color("math18"), Some("#ef4444".to_string()));
		assert_eq!(color("math18-m3"), color("math18"));
		assert_eq!(color("math20c-a1"), color("math20c"));
		assert_eq!(color("cse12-a1"), Some("#06b6d4".to_string()));
	}

	#[test]
	fn test_prerequisites_point_forward() {
		let data = demo_graph();
		let prereqs: Vec<_> = data
			.links
			.iter()
			.filter(|l| l.relation(&data) == Some(LinkRelation::Prerequisite))
			.map(|l| (l.source.as_str(), l.target.as_str()))
			.collect();
		assert_eq!(prereqs, vec![("math18", "math20c"), ("cse12", "cse101")]);
	}

	#[test]
	fn test_duplicate_names_keep_distinct_ids() {
		let data = demo_graph();
		let pa1: Vec<_> = data.nodes.iter().filter(|n| n.name == "PA 1").collect();
		assert_eq!(pa1.len(), 2);
		assert_ne!(pa1[0].id, pa1[1].id);
	}
}
