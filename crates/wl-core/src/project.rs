//! Regrouping of a time sheet by project.

use std::collections::HashMap;

use crate::sheet::TimeSheet;
use crate::task::Task;

/// Tasks of one project, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTasks<'a> {
    pub name: &'a str,
    pub tasks: Vec<&'a Task>,
}

/// All tasks of a [`TimeSheet`] bucketed by project name.
///
/// Projects iterate in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct ProjectSheet<'a> {
    projects: Vec<ProjectTasks<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> ProjectSheet<'a> {
    pub fn from_time_sheet(sheet: &'a TimeSheet) -> Self {
        let mut projects = Self::default();
        for task in sheet.tasks() {
            projects.insert(task);
        }
        projects
    }

    fn insert(&mut self, task: &'a Task) {
        let name = task.project.as_str();
        if let Some(&idx) = self.index.get(name) {
            self.projects[idx].tasks.push(task);
            return;
        }
        self.index.insert(name, self.projects.len());
        self.projects.push(ProjectTasks {
            name,
            tasks: vec![task],
        });
    }

    /// Tasks logged against `project`, if any.
    pub fn get(&self, project: &str) -> Option<&[&'a Task]> {
        self.index
            .get(project)
            .map(|&idx| self.projects[idx].tasks.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectTasks<'a>> {
        self.projects.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.projects.iter().map(|project| project.name)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl<'s, 'a> IntoIterator for &'s ProjectSheet<'a> {
    type Item = &'s ProjectTasks<'a>;
    type IntoIter = std::slice::Iter<'s, ProjectTasks<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::parse_time_sheet;

    #[test]
    fn projects_iterate_in_first_seen_order() {
        let sheet = parse_time_sheet(
            "01.03.2021\n1:00:00 - [A] first\n2:00:00 - [B] second\n02.03.2021\n3:00:00 - [A] third\n",
        )
        .unwrap();
        let projects = ProjectSheet::from_time_sheet(&sheet);

        assert_eq!(projects.names().collect::<Vec<_>>(), vec!["A", "B"]);
        let a: Vec<_> = projects
            .get("A")
            .unwrap()
            .iter()
            .map(|task| task.description.as_str())
            .collect();
        assert_eq!(a, vec!["first", "third"]);
        assert_eq!(projects.get("B").unwrap().len(), 1);
        assert_eq!(projects.get("C"), None);
    }

    #[test]
    fn buckets_keep_chronological_order_across_days() {
        let sheet = parse_time_sheet(
            "01.03.2021\n1:00:00 - [A] x\n02.03.2021\n1:00:00 - [A] y\n03.03.2021\n1:00:00 - [A] z\n",
        )
        .unwrap();
        let projects = ProjectSheet::from_time_sheet(&sheet);
        let dates: Vec<_> = projects
            .get("A")
            .unwrap()
            .iter()
            .filter_map(|task| task.date())
            .map(|date| date.day)
            .collect();
        assert_eq!(dates, vec![1, 2, 3]);
    }

    #[test]
    fn empty_sheet_has_no_projects() {
        let sheet = TimeSheet::new();
        let projects = ProjectSheet::from_time_sheet(&sheet);
        assert!(projects.is_empty());
        assert_eq!(projects.len(), 0);
    }

    #[test]
    fn aggregation_does_not_touch_the_sheet() {
        let sheet = parse_time_sheet("01.03.2021\n1:00:00 - [A] x\n").unwrap();
        let before = sheet.clone();
        let _projects = ProjectSheet::from_time_sheet(&sheet);
        assert_eq!(sheet, before);
    }
}
