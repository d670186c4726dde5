//! DynamoDB-backed store (single-table layout).
//!
//! All todos live in one partition; the sort key embeds the ULID, so a
//! plain query returns records in creation order.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use todo_domain::{Todo, TodoId};
use ulid::Ulid;

use super::{NewTodo, StoreError, TodoPatch, TodoStore};

const PARTITION_KEY: &str = "TODOS";

#[derive(Clone)]
pub struct DynamoTodoStore {
    client: Client,
    table_name: String,
}

impl DynamoTodoStore {
    /// Builds a client from the ambient AWS configuration and verifies the
    /// table is reachable. Callers treat a failure here as fatal.
    pub async fn connect(table_name: &str) -> Result<Self, StoreError> {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);
        client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        tracing::info!(table = table_name, "connected to DynamoDB");
        Ok(Self {
            client,
            table_name: table_name.to_string(),
        })
    }

    /// Wraps a pre-built client. Used by tests running against DynamoDB Local.
    pub fn with_client(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }

    fn sort_key(id: &TodoId) -> String {
        format!("TODO#{id}")
    }

    /// This backend's identifier form is a ULID string.
    fn validate_id(id: &TodoId) -> Result<(), StoreError> {
        Ulid::from_string(id.as_str())
            .map(|_| ())
            .map_err(|_| StoreError::InvalidId(id.to_string()))
    }
}

#[async_trait]
impl TodoStore for DynamoTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("PK = :pk")
            .expression_attribute_values(":pk", AttributeValue::S(PARTITION_KEY.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(result.items().iter().filter_map(item_to_todo).collect())
    }

    async fn create(&self, new: NewTodo) -> Result<Todo, StoreError> {
        let todo = Todo {
            id: TodoId::from_raw(Ulid::new().to_string()),
            completed: new.completed,
            body: new.body,
        };

        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("PK", AttributeValue::S(PARTITION_KEY.to_string()))
            .item("SK", AttributeValue::S(Self::sort_key(&todo.id)))
            .item("id", AttributeValue::S(todo.id.to_string()))
            .item("completed", AttributeValue::Bool(todo.completed))
            .item("body", AttributeValue::S(todo.body.clone()))
            .send()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(todo)
    }

    async fn get(&self, id: &TodoId) -> Result<Todo, StoreError> {
        Self::validate_id(id)?;

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(PARTITION_KEY.to_string()))
            .key("SK", AttributeValue::S(Self::sort_key(id)))
            .send()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let item = result.item().ok_or(StoreError::NotFound)?;
        item_to_todo(item).ok_or_else(|| StoreError::Backend("malformed item".to_string()))
    }

    async fn update(&self, id: &TodoId, patch: TodoPatch) -> Result<Todo, StoreError> {
        Self::validate_id(id)?;

        let mut update_parts = vec!["completed = :completed"];
        let mut builder = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(PARTITION_KEY.to_string()))
            .key("SK", AttributeValue::S(Self::sort_key(id)))
            .condition_expression("attribute_exists(SK)")
            .expression_attribute_values(":completed", AttributeValue::Bool(patch.completed))
            .return_values(ReturnValue::AllNew);

        if let Some(body) = &patch.body {
            update_parts.push("body = :body");
            builder = builder.expression_attribute_values(":body", AttributeValue::S(body.clone()));
        }

        let expression = format!("SET {}", update_parts.join(", "));
        builder = builder.update_expression(expression);

        let result = builder.send().await.map_err(|e| {
            let err = e.into_service_error();
            if err.is_conditional_check_failed_exception() {
                StoreError::NotFound
            } else {
                StoreError::Backend(err.to_string())
            }
        })?;

        let item = result.attributes().ok_or(StoreError::NotFound)?;
        item_to_todo(item)
            .ok_or_else(|| StoreError::Backend("failed to parse updated item".to_string()))
    }

    async fn delete(&self, id: &TodoId) -> Result<(), StoreError> {
        Self::validate_id(id)?;

        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(PARTITION_KEY.to_string()))
            .key("SK", AttributeValue::S(Self::sort_key(id)))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        // ALL_OLD comes back empty when no record matched the key
        if result.attributes().is_none() {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Option<Todo> {
    Some(Todo {
        id: TodoId::from_raw(item.get("id")?.as_s().ok()?.clone()),
        completed: *item.get("completed")?.as_bool().ok()?,
        body: item.get("body")?.as_s().ok()?.clone(),
    })
}
