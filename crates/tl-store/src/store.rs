use crate::{Result as StoreErrorResult, StoreError};

use tl_core::{Participant, Role, Task, TaskList, UserProfile};

use std::collections::HashSet;
use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// Typed HTTP client for the document store REST API.
///
/// Constructed per command with the session bearer token; every request
/// carries `Authorization: Bearer <token>`.
pub struct DocumentStore {
    pub base_url: String,
    token: String,
    client: ReqwestClient,
}

impl DocumentStore {
    /// Create a new store facade
    ///
    /// # Arguments
    /// * `base_url` - Store URL (e.g., "http://127.0.0.1:8087")
    /// * `token` - Opaque bearer token from the identity provider
    pub fn new(base_url: &str, token: &str) -> Self {
        Self::with_client(base_url, token, ReqwestClient::new())
    }

    /// Create a facade reusing a pre-configured reqwest client
    /// (timeouts come from the application's http config).
    pub fn with_client(base_url: &str, token: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        }
    }

    /// Build a request with the bearer token
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("store request: {method} {url}");
        self.client.request(method, &url).bearer_auth(&self.token)
    }

    /// Send a request and return status plus parsed body.
    /// An empty body (204) parses as Null.
    async fn send(&self, req: reqwest::RequestBuilder) -> StoreErrorResult<(StatusCode, Value)> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)
                .map_err(|e| StoreError::decode(format!("invalid JSON body: {e}")))?
        };

        Ok((status, body))
    }

    /// Extract `{"error": {"code", "message"}}` from a failure body
    fn error_parts(body: &Value) -> (String, String) {
        let error = body.get("error");
        let code = error
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error")
            .to_string();
        (code, message)
    }

    /// Execute a read and decode the body as T
    async fn execute_read<T: serde::de::DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        kind: &'static str,
        id: &str,
    ) -> StoreErrorResult<T> {
        let (status, body) = self.send(req).await?;

        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::not_found(kind, id));
        }
        if !status.is_success() {
            let (code, message) = Self::error_parts(&body);
            return Err(StoreError::Api {
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        serde_json::from_value(body).map_err(|e| StoreError::decode(format!("{kind}: {e}")))
    }

    /// Execute a write; any non-2xx becomes a Write error for `op`
    async fn execute_write(
        &self,
        req: reqwest::RequestBuilder,
        op: &'static str,
    ) -> StoreErrorResult<Value> {
        let (status, body) = self.send(req).await?;

        if !status.is_success() {
            let (code, message) = Self::error_parts(&body);
            return Err(StoreError::write(op, code, message));
        }

        Ok(body)
    }

    /// Execute a collection read and unwrap its `{"documents": [...]}` body
    async fn execute_collection<T: serde::de::DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        kind: &'static str,
    ) -> StoreErrorResult<Vec<T>> {
        let (status, body) = self.send(req).await?;

        if !status.is_success() {
            let (code, message) = Self::error_parts(&body);
            return Err(StoreError::Api {
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Self::documents(body, kind)
    }

    /// Pull the store-assigned id out of a creation response
    fn created_id(body: &Value, op: &'static str) -> StoreErrorResult<String> {
        body.get("id")
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| StoreError::decode(format!("{op}: response carries no id")))
    }

    /// Unwrap a `{"documents": [...]}` collection response
    fn documents<T: serde::de::DeserializeOwned>(
        body: Value,
        kind: &'static str,
    ) -> StoreErrorResult<Vec<T>> {
        let docs = body
            .get("documents")
            .cloned()
            .unwrap_or_else(|| Value::Array(vec![]));
        serde_json::from_value(docs).map_err(|e| StoreError::decode(format!("{kind}: {e}")))
    }

    // =========================================================================
    // Task List Operations
    // =========================================================================

    /// Create a list owned by the caller. The owner is seeded as the sole
    /// participant with role Admin.
    pub async fn create_list(
        &self,
        name: &str,
        owner_uid: &str,
        owner_email: &str,
    ) -> StoreErrorResult<String> {
        #[derive(Serialize)]
        struct CreateListRequest<'a> {
            name: &'a str,
            #[serde(rename = "ownerUid")]
            owner_uid: &'a str,
            owner: &'a str,
            participants: Vec<Participant>,
        }

        let body = CreateListRequest {
            name,
            owner_uid,
            owner: owner_email,
            participants: vec![Participant::new(owner_email, Role::Admin)],
        };
        let req = self.request(Method::POST, "/v1/taskLists").json(&body);
        let body = self.execute_write(req, "create_list").await?;
        Self::created_id(&body, "create_list")
    }

    /// Union of lists owned by `email` and lists where `email` appears in
    /// `participants`, de-duplicated by id. Owner lists come first and the
    /// first occurrence wins.
    pub async fn lists_for_user(&self, email: &str) -> StoreErrorResult<Vec<TaskList>> {
        let owner_req = self
            .request(Method::GET, "/v1/taskLists")
            .query(&[("owner", email)]);
        let owned: Vec<TaskList> = self.execute_collection(owner_req, "task lists").await?;

        let participant_req = self
            .request(Method::GET, "/v1/taskLists")
            .query(&[("participant", email)]);
        let shared: Vec<TaskList> = self.execute_collection(participant_req, "task lists").await?;

        let mut seen = HashSet::new();
        let mut lists = Vec::with_capacity(owned.len() + shared.len());
        for list in owned.into_iter().chain(shared) {
            if seen.insert(list.id.clone()) {
                lists.push(list);
            }
        }

        Ok(lists)
    }

    /// Get a list by id
    pub async fn get_list(&self, id: &str) -> StoreErrorResult<TaskList> {
        let req = self.request(Method::GET, &format!("/v1/taskLists/{}", id));
        self.execute_read(req, "task list", id).await
    }

    /// Rename a list (whole-field replacement, last writer wins)
    pub async fn rename_list(&self, id: &str, name: &str) -> StoreErrorResult<()> {
        #[derive(Serialize)]
        struct RenameRequest<'a> {
            name: &'a str,
        }

        let req = self
            .request(Method::PATCH, &format!("/v1/taskLists/{}", id))
            .json(&RenameRequest { name });
        self.execute_write(req, "rename_list").await?;
        Ok(())
    }

    /// Persist the full updated participant sequence.
    /// Replace-whole-array semantics: two concurrent admins can silently
    /// clobber each other's addition.
    pub async fn replace_participants(
        &self,
        id: &str,
        participants: &[Participant],
    ) -> StoreErrorResult<()> {
        #[derive(Serialize)]
        struct ParticipantsRequest<'a> {
            participants: &'a [Participant],
        }

        let req = self
            .request(Method::PATCH, &format!("/v1/taskLists/{}", id))
            .json(&ParticipantsRequest { participants });
        self.execute_write(req, "replace_participants").await?;
        Ok(())
    }

    /// Delete a list. Child tasks are NOT cascade-deleted.
    pub async fn delete_list(&self, id: &str) -> StoreErrorResult<()> {
        let req = self.request(Method::DELETE, &format!("/v1/taskLists/{}", id));
        self.execute_write(req, "delete_list").await?;
        Ok(())
    }

    // =========================================================================
    // Task Operations (scoped under a list id)
    // =========================================================================

    /// Full scan of a list's task collection
    pub async fn tasks_for_list(&self, list_id: &str) -> StoreErrorResult<Vec<Task>> {
        let req = self.request(Method::GET, &format!("/v1/taskLists/{}/tasks", list_id));
        let (status, body) = self.send(req).await?;

        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::not_found("task list", list_id));
        }
        if !status.is_success() {
            let (code, message) = Self::error_parts(&body);
            return Err(StoreError::Api {
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Self::documents(body, "tasks")
    }

    /// Point lookup of one task via a collection scan; used by the
    /// completion toggle to read the current flag.
    pub async fn get_task(&self, list_id: &str, task_id: &str) -> StoreErrorResult<Task> {
        let tasks = self.tasks_for_list(list_id).await?;
        tasks
            .into_iter()
            .find(|t| t.id == task_id)
            .ok_or_else(|| StoreError::not_found("task", task_id))
    }

    /// Create a task; new tasks always start incomplete
    pub async fn create_task(
        &self,
        list_id: &str,
        name: &str,
        description: &str,
    ) -> StoreErrorResult<String> {
        #[derive(Serialize)]
        struct CreateTaskRequest<'a> {
            name: &'a str,
            description: &'a str,
            completed: bool,
        }

        let body = CreateTaskRequest {
            name,
            description,
            completed: false,
        };
        let req = self
            .request(Method::POST, &format!("/v1/taskLists/{}/tasks", list_id))
            .json(&body);
        let body = self.execute_write(req, "create_task").await?;
        Self::created_id(&body, "create_task")
    }

    /// Update a task's name and description
    pub async fn update_task(
        &self,
        list_id: &str,
        task_id: &str,
        name: &str,
        description: &str,
    ) -> StoreErrorResult<()> {
        #[derive(Serialize)]
        struct UpdateTaskRequest<'a> {
            name: &'a str,
            description: &'a str,
        }

        let req = self
            .request(
                Method::PATCH,
                &format!("/v1/taskLists/{}/tasks/{}", list_id, task_id),
            )
            .json(&UpdateTaskRequest { name, description });
        self.execute_write(req, "update_task").await?;
        Ok(())
    }

    /// Delete a task
    pub async fn delete_task(&self, list_id: &str, task_id: &str) -> StoreErrorResult<()> {
        let req = self.request(
            Method::DELETE,
            &format!("/v1/taskLists/{}/tasks/{}", list_id, task_id),
        );
        self.execute_write(req, "delete_task").await?;
        Ok(())
    }

    /// Set a task's completion flag
    pub async fn set_task_completed(
        &self,
        list_id: &str,
        task_id: &str,
        completed: bool,
    ) -> StoreErrorResult<()> {
        #[derive(Serialize)]
        struct CompletedRequest {
            completed: bool,
        }

        let req = self
            .request(
                Method::PATCH,
                &format!("/v1/taskLists/{}/tasks/{}", list_id, task_id),
            )
            .json(&CompletedRequest { completed });
        self.execute_write(req, "set_task_completed").await?;
        Ok(())
    }

    // =========================================================================
    // User Profile Operations
    // =========================================================================

    /// Fetch a companion profile record; absent is not an error
    pub async fn get_user(&self, uid: &str) -> StoreErrorResult<Option<UserProfile>> {
        let req = self.request(Method::GET, &format!("/v1/users/{}", uid));
        match self.execute_read(req, "user", uid).await {
            Ok(profile) => Ok(Some(profile)),
            Err(StoreError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Write a companion profile record, keyed by uid
    pub async fn put_user(&self, profile: &UserProfile) -> StoreErrorResult<()> {
        let req = self
            .request(Method::PUT, &format!("/v1/users/{}", profile.uid))
            .json(profile);
        self.execute_write(req, "put_user").await?;
        Ok(())
    }
}
