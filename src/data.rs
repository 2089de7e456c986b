//! Demo Data
//!
//! In-memory data model for the prototype. Everything here is either a fixed
//! literal or regenerated per render from an injected random source; nothing
//! carries identity across renders.

/// Kanban column / task status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Blocked,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Blocked,
        TaskStatus::Done,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Blocked => "Blocked",
            TaskStatus::Done => "Done",
        }
    }

    /// Text color class for the status label on a task card.
    pub fn accent_class(self) -> &'static str {
        match self {
            TaskStatus::Done => "text-green-400",
            TaskStatus::Blocked => "text-red-400",
            _ => "text-gray-400",
        }
    }
}

/// Department a task belongs to, used by the filter toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Department {
    Product,
    Design,
    Engineering,
    Qa,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Product,
        Department::Design,
        Department::Engineering,
        Department::Qa,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Department::Product => "Product",
            Department::Design => "Design",
            Department::Engineering => "Engineering",
            Department::Qa => "QA",
        }
    }
}

/// A single task on the board.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub title: String,
    pub owner: &'static str,
    pub department: Department,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub status: TaskStatus,
}

/// One kanban column with its tasks.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardColumn {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

const OWNERS: [&str; 5] = ["Ava", "Ben", "Iris", "Leo", "Mia"];

/// Number of projects shown on the summary cards. The prototype has no
/// project entity, only this fixed figure.
pub const PROJECT_COUNT: usize = 3;

/// Generate a demo board with the given number of tasks per status column.
///
/// `rand` supplies values in `[0, 1)`; callers bind it to
/// `js_sys::Math::random` in the browser and to a deterministic closure in
/// tests.
pub fn demo_board(counts: [usize; 4], rand: &mut impl FnMut() -> f64) -> Vec<BoardColumn> {
    TaskStatus::ALL
        .into_iter()
        .zip(counts)
        .map(|(status, count)| BoardColumn {
            status,
            tasks: (0..count)
                .map(|i| Task {
                    title: format!("{} · Task {}", status.label(), i + 1),
                    owner: OWNERS[i % OWNERS.len()],
                    department: Department::ALL[i % Department::ALL.len()],
                    progress: (rand() * 100.0).round().min(100.0) as u8,
                    status,
                })
                .collect(),
        })
        .collect()
}

/// Narrow a board by the toolbar filters.
///
/// `department` and `status` are the select values ("All" passes everything);
/// `keyword` matches case-insensitively against title and owner. Columns are
/// kept even when emptied so the board shape stays stable.
pub fn filter_board(
    board: &[BoardColumn],
    department: &str,
    status: &str,
    keyword: &str,
) -> Vec<BoardColumn> {
    let keyword = keyword.trim().to_lowercase();
    board
        .iter()
        .map(|col| BoardColumn {
            status: col.status,
            tasks: col
                .tasks
                .iter()
                .filter(|t| department == "All" || t.department.label() == department)
                .filter(|t| status == "All" || t.status.label() == status)
                .filter(|t| {
                    keyword.is_empty()
                        || t.title.to_lowercase().contains(&keyword)
                        || t.owner.to_lowercase().contains(&keyword)
                })
                .cloned()
                .collect(),
        })
        .collect()
}

/// Figures for the summary cards row, derived from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub projects: usize,
    pub tasks: usize,
    /// Share of tasks in the Done column, rounded percent.
    pub completion_pct: u8,
    pub blocked: usize,
}

impl Summary {
    pub fn from_board(board: &[BoardColumn]) -> Self {
        let tasks: usize = board.iter().map(|c| c.tasks.len()).sum();
        let done: usize = board
            .iter()
            .filter(|c| c.status == TaskStatus::Done)
            .map(|c| c.tasks.len())
            .sum();
        let blocked: usize = board
            .iter()
            .filter(|c| c.status == TaskStatus::Blocked)
            .map(|c| c.tasks.len())
            .sum();
        let completion_pct = if tasks == 0 {
            0
        } else {
            (done as f64 / tasks as f64 * 100.0).round() as u8
        };
        Summary {
            projects: PROJECT_COUNT,
            tasks,
            completion_pct,
            blocked,
        }
    }
}

/// Alert severity. Only used to select a display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    High,
    Medium,
    Info,
}

impl AlertLevel {
    pub fn dot_color(self) -> &'static str {
        match self {
            AlertLevel::High => "#ef4444",
            AlertLevel::Medium => "#f59e0b",
            AlertLevel::Info => "#0ea5e9",
        }
    }
}

/// A single alert record.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: &'static str,
    pub level: AlertLevel,
    pub text: &'static str,
    pub target: &'static str,
}

/// The fixed alert list shown on the Alerts page.
pub fn demo_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "a1",
            level: AlertLevel::High,
            text: "API integration is blocked on an unfinished upstream dependency",
            target: "API integration",
        },
        Alert {
            id: "a2",
            level: AlertLevel::Medium,
            text: "UI design is running 10% behind schedule",
            target: "UI design",
        },
        Alert {
            id: "a3",
            level: AlertLevel::Info,
            text: "Requirements review is due tomorrow",
            target: "Requirements review",
        },
    ]
}

/// Render tasks as CSV for the toolbar export. Fields containing commas,
/// quotes, or newlines are quoted with doubled inner quotes.
pub fn tasks_to_csv(tasks: &[Task]) -> String {
    let mut out = String::from("title,owner,department,progress,status\n");
    for task in tasks {
        let row = [
            csv_field(&task.title),
            csv_field(task.owner),
            csv_field(task.department.label()),
            task.progress.to_string(),
            csv_field(task.status.label()),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(v: f64) -> impl FnMut() -> f64 {
        move || v
    }

    #[test]
    fn test_demo_board_shape_and_progress_bounds() {
        let mut seq = {
            let mut n = 0u32;
            move || {
                n += 7;
                (n % 100) as f64 / 100.0
            }
        };
        let board = demo_board([3, 5, 2, 14], &mut seq);
        assert_eq!(board.len(), 4);
        let counts: Vec<usize> = board.iter().map(|c| c.tasks.len()).collect();
        assert_eq!(counts, vec![3, 5, 2, 14]);
        for col in &board {
            for task in &col.tasks {
                assert!(task.progress <= 100);
                assert_eq!(task.status, col.status);
            }
        }
    }

    #[test]
    fn test_summary_matches_board() {
        let board = demo_board([2, 4, 1, 6], &mut fixed(0.5));
        let summary = Summary::from_board(&board);
        assert_eq!(summary.projects, PROJECT_COUNT);
        assert_eq!(summary.tasks, 13);
        assert_eq!(summary.blocked, 1);
        // 6 of 13 done = 46.15...%
        assert_eq!(summary.completion_pct, 46);
    }

    #[test]
    fn test_summary_empty_board() {
        let board = demo_board([0, 0, 0, 0], &mut fixed(0.0));
        let summary = Summary::from_board(&board);
        assert_eq!(summary.tasks, 0);
        assert_eq!(summary.completion_pct, 0);
    }

    #[test]
    fn test_filter_by_status_keeps_column_shape() {
        let board = demo_board([2, 4, 1, 6], &mut fixed(0.5));
        let filtered = filter_board(&board, "All", "Blocked", "");
        assert_eq!(filtered.len(), 4);
        for col in &filtered {
            if col.status == TaskStatus::Blocked {
                assert_eq!(col.tasks.len(), 1);
            } else {
                assert!(col.tasks.is_empty());
            }
        }
    }

    #[test]
    fn test_filter_by_keyword_matches_owner() {
        let board = demo_board([2, 4, 1, 6], &mut fixed(0.5));
        let filtered = filter_board(&board, "All", "All", "ava");
        let total: usize = filtered.iter().map(|c| c.tasks.len()).sum();
        assert!(total > 0);
        for col in &filtered {
            for task in &col.tasks {
                assert_eq!(task.owner, "Ava");
            }
        }
    }

    #[test]
    fn test_filter_by_department() {
        let board = demo_board([2, 4, 1, 6], &mut fixed(0.5));
        let filtered = filter_board(&board, "Design", "All", "");
        for col in &filtered {
            for task in &col.tasks {
                assert_eq!(task.department, Department::Design);
            }
        }
    }

    #[test]
    fn test_csv_header_and_rows() {
        let board = demo_board([1, 0, 0, 1], &mut fixed(0.25));
        let tasks: Vec<Task> = board.into_iter().flat_map(|c| c.tasks).collect();
        let csv = tasks_to_csv(&tasks);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "title,owner,department,progress,status");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Not Started · Task 1"));
    }

    #[test]
    fn test_csv_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_alert_levels_closed_set() {
        let alerts = demo_alerts();
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].level, AlertLevel::High);
        assert_eq!(alerts[1].level, AlertLevel::Medium);
        assert_eq!(alerts[2].level, AlertLevel::Info);
        // ids are unique
        assert_ne!(alerts[0].id, alerts[1].id);
        assert_ne!(alerts[1].id, alerts[2].id);
    }
}
