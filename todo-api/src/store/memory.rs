//! インメモリ実装（開発・テスト用）
//!
//! コレクション全体を単一の `Mutex` で保護し、挿入順を保持します。
//! プロセス再起動で消えます。識別子は 1 始まりの連番整数です。

use std::sync::Mutex;

use async_trait::async_trait;
use todo_domain::{Todo, TodoId};

use super::{NewTodo, StoreError, TodoPatch, TodoStore};

/// 連番整数を採番するインメモリストア
#[derive(Default)]
pub struct InMemoryTodoStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    todos: Vec<Todo>,
}

/// このバックエンドの識別子形式は u64 の 10 進表記
fn validate_id(id: &TodoId) -> Result<(), StoreError> {
    id.as_str()
        .parse::<u64>()
        .map(|_| ())
        .map_err(|_| StoreError::InvalidId(id.to_string()))
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.todos.clone())
    }

    async fn create(&self, new: NewTodo) -> Result<Todo, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let todo = Todo {
            id: TodoId::from_raw(inner.next_id.to_string()),
            completed: new.completed,
            body: new.body,
        };
        inner.todos.push(todo.clone());
        Ok(todo)
    }

    async fn get(&self, id: &TodoId) -> Result<Todo, StoreError> {
        validate_id(id)?;
        let inner = self.inner.lock().unwrap();
        inner
            .todos
            .iter()
            .find(|t| t.id == *id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: &TodoId, patch: TodoPatch) -> Result<Todo, StoreError> {
        validate_id(id)?;
        let mut inner = self.inner.lock().unwrap();
        let todo = inner
            .todos
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or(StoreError::NotFound)?;
        if let Some(body) = patch.body {
            todo.body = body;
        }
        todo.completed = patch.completed;
        Ok(todo.clone())
    }

    async fn delete(&self, id: &TodoId) -> Result<(), StoreError> {
        validate_id(id)?;
        let mut inner = self.inner.lock().unwrap();
        let pos = inner
            .todos
            .iter()
            .position(|t| t.id == *id)
            .ok_or(StoreError::NotFound)?;
        inner.todos.remove(pos);
        Ok(())
    }
}
