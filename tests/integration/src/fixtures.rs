use todo_api::store::NewTodo;

pub struct TodoFixtures;

impl TodoFixtures {
    pub fn new_todo(body: &str) -> NewTodo {
        NewTodo {
            body: body.to_string(),
            completed: false,
        }
    }

    pub fn completed_todo(body: &str) -> NewTodo {
        NewTodo {
            body: body.to_string(),
            completed: true,
        }
    }
}
