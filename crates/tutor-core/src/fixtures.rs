//! Fixed demo dataset.
//!
//! Served when demo mode is on, and as the fallback when a live call
//! fails. Hand-authored and deterministic: repeated calls return equal
//! values, so demo reads are idempotent within a process run.

use serde_json::json;
use tutor_types::exercise::{DatabaseSchema, Difficulty, Exercise, Hint, SchemaRef};
use tutor_types::result::{AiReply, QueryResult, SubmitResult};

fn employees_schema() -> SchemaRef {
    SchemaRef {
        id: 1,
        name: "employees".to_string(),
        display_name: "Employees DB".to_string(),
        db_name: "employees".to_string(),
    }
}

pub fn schemas() -> Vec<DatabaseSchema> {
    vec![DatabaseSchema {
        id: 1,
        name: "employees".to_string(),
        display_name: "Employees DB".to_string(),
        description: "Demo employees schema".to_string(),
        exercise_count: 3,
    }]
}

pub fn exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: 1,
            title: "Two Sum (SQL demo)".to_string(),
            description: "Find pairs of employees in the same department.".to_string(),
            difficulty: Difficulty::Easy,
            initial_query: "SELECT id, name, dept FROM employees".to_string(),
            hints: vec![Hint {
                level: 1,
                text: "Start with a simple SELECT".to_string(),
            }],
            schema: employees_schema(),
            tags: vec!["select".to_string(), "join".to_string()],
        },
        Exercise {
            id: 2,
            title: "Count by Department".to_string(),
            description: "Count number of employees per department.".to_string(),
            difficulty: Difficulty::Easy,
            initial_query: "SELECT dept, COUNT(*) FROM employees GROUP BY dept".to_string(),
            hints: Vec::new(),
            schema: employees_schema(),
            tags: vec!["aggregate".to_string()],
        },
        Exercise {
            id: 3,
            title: "Top Salaries".to_string(),
            description: "Find employees with highest salaries in each department.".to_string(),
            difficulty: Difficulty::Medium,
            initial_query: "SELECT * FROM employees".to_string(),
            hints: Vec::new(),
            schema: employees_schema(),
            tags: vec!["window".to_string(), "join".to_string()],
        },
    ]
}

/// Fixture exercise by id, defaulting to the first one when no id matches.
pub fn exercise(id: i64) -> Exercise {
    let mut all = exercises();
    let index = all.iter().position(|e| e.id == id).unwrap_or(0);
    all.swap_remove(index)
}

pub fn query_result() -> QueryResult {
    QueryResult {
        success: true,
        columns: vec!["id".to_string(), "name".to_string(), "dept".to_string()],
        rows: vec![
            vec![json!(1), json!("Alice"), json!("Engineering")],
            vec![json!(2), json!("Bob"), json!("Engineering")],
            vec![json!(3), json!("Carol"), json!("HR")],
        ],
        row_count: 3,
        execution_time: 12.0,
        error: None,
    }
}

pub fn submit_result() -> SubmitResult {
    SubmitResult {
        correct: true,
        message: "All tests passed (demo).".to_string(),
        user_result: query_result(),
        diff: None,
    }
}

pub fn ai_reply() -> AiReply {
    AiReply {
        response: "This is a canned assistant reply. Try selecting fewer columns.".to_string(),
    }
}
