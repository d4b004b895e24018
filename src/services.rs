// API service layer for communicating with backend
use gloo_net::http::{Request, Response};
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

const API_BASE_URL: &str = "/api";
const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

// ============================================
// ERROR HANDLING
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================
// SESSION TYPES
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

// ============================================
// HTTP CLIENT
// ============================================

pub struct ApiClient;

impl ApiClient {
    pub fn get_auth_token() -> Option<String> {
        LocalStorage::get::<String>(TOKEN_KEY).ok()
    }

    pub fn get_cached_user() -> Option<SessionUser> {
        LocalStorage::get::<SessionUser>(USER_KEY).ok()
    }

    pub fn set_session(token: &str, user: &SessionUser) {
        let _ = LocalStorage::set(TOKEN_KEY, token);
        let _ = LocalStorage::set(USER_KEY, user);
    }

    pub fn clear_session() {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
    }

    async fn request<T: DeserializeOwned>(method: &str, endpoint: &str) -> ApiResult<T> {
        let url = format!("{}{}", API_BASE_URL, endpoint);

        let mut req = match method {
            "GET" => Request::get(&url),
            "DELETE" => Request::delete(&url),
            _ => return Err(ApiError { message: "Invalid method".to_string(), code: None }),
        };

        if let Some(token) = Self::get_auth_token() {
            req = req.header("Authorization", &format!("Bearer {}", token));
        }

        let response = req.send().await.map_err(|e| ApiError {
            message: e.to_string(),
            code: Some("NETWORK_ERROR".to_string()),
        })?;

        if response.ok() {
            response.json::<T>().await.map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("PARSE_ERROR".to_string()),
            })
        } else {
            Err(Self::response_error(response).await)
        }
    }

    async fn request_with_body<T: DeserializeOwned, B: Serialize>(
        method: &str,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = format!("{}{}", API_BASE_URL, endpoint);

        let req = match method {
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            _ => return Err(ApiError { message: "Invalid method".to_string(), code: None }),
        };

        let mut req = req.header("Content-Type", "application/json");

        if let Some(token) = Self::get_auth_token() {
            req = req.header("Authorization", &format!("Bearer {}", token));
        }

        let response = req
            .json(body)
            .map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("SERIALIZE_ERROR".to_string()),
            })?
            .send()
            .await
            .map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("NETWORK_ERROR".to_string()),
            })?;

        if response.ok() {
            response.json::<T>().await.map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("PARSE_ERROR".to_string()),
            })
        } else {
            Err(Self::response_error(response).await)
        }
    }

    // The backend reports failures as `{ "message": "..." }`; anything else
    // collapses to a generic status message.
    async fn response_error(response: Response) -> ApiError {
        let status = response.status();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("message").and_then(|m| m.as_str()).map(str::to_owned));

        ApiError {
            message: message.unwrap_or_else(|| format!("HTTP Error: {}", status)),
            code: Some(format!("HTTP_{}", status)),
        }
    }

    // GET request
    pub async fn get<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
        Self::request("GET", endpoint).await
    }

    // POST request
    pub async fn post<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> ApiResult<T> {
        Self::request_with_body("POST", endpoint, body).await
    }

    // PUT request
    pub async fn put<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> ApiResult<T> {
        Self::request_with_body("PUT", endpoint, body).await
    }

    // DELETE request; the backend answers these with an empty body
    pub async fn delete(endpoint: &str) -> ApiResult<()> {
        let url = format!("{}{}", API_BASE_URL, endpoint);

        let mut req = Request::delete(&url);
        if let Some(token) = Self::get_auth_token() {
            req = req.header("Authorization", &format!("Bearer {}", token));
        }

        let response = req.send().await.map_err(|e| ApiError {
            message: e.to_string(),
            code: Some("NETWORK_ERROR".to_string()),
        })?;

        if response.ok() {
            Ok(())
        } else {
            Err(Self::response_error(response).await)
        }
    }
}

// ============================================
// AUTH SERVICE
// ============================================

pub mod auth {
    use super::*;

    #[derive(Debug, Clone, Serialize)]
    pub struct LoginRequest {
        pub username: String,
        pub password: String,
    }

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    pub struct LoginResponse {
        pub token: String,
        pub user: SessionUser,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RegisterRequest {
        pub username: String,
        pub password: String,
        pub role: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub assigned_client_id: Option<i64>,
    }

    pub async fn login(request: &LoginRequest) -> ApiResult<LoginResponse> {
        let response: LoginResponse = ApiClient::post("/auth/login", request).await?;
        ApiClient::set_session(&response.token, &response.user);
        Ok(response)
    }

    pub async fn register(request: &RegisterRequest) -> ApiResult<()> {
        ApiClient::post::<serde_json::Value, _>("/auth/register", request)
            .await
            .map(|_| ())
    }

    pub fn logout() {
        ApiClient::clear_session();
    }
}

// ============================================
// CLIENTS SERVICE
// ============================================

pub mod clients {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Client {
        pub id: i64,
        pub name: String,
        pub email: String,
        // Prisma-style relation count; absent on freshly created rows
        #[serde(rename = "_count", default)]
        pub counts: ClientCounts,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct ClientCounts {
        #[serde(default)]
        pub projects: i64,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct CreateClientRequest {
        pub name: String,
        pub email: String,
        pub password: String,
        pub role: String,
    }

    pub async fn list() -> ApiResult<Vec<Client>> {
        ApiClient::get("/clients").await
    }

    pub async fn create(request: &CreateClientRequest) -> ApiResult<Client> {
        ApiClient::post("/clients", request).await
    }
}

// ============================================
// PROJECTS SERVICE
// ============================================

pub mod projects {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum ProjectStatus {
        Pending,
        Active,
        InProgress,
        Completed,
        OnHold,
        #[serde(other)]
        Unknown,
    }

    impl ProjectStatus {
        pub fn all() -> [ProjectStatus; 5] {
            [
                ProjectStatus::Active,
                ProjectStatus::Pending,
                ProjectStatus::InProgress,
                ProjectStatus::Completed,
                ProjectStatus::OnHold,
            ]
        }

        pub fn as_wire(&self) -> &'static str {
            match self {
                ProjectStatus::Pending => "PENDING",
                ProjectStatus::Active => "ACTIVE",
                ProjectStatus::InProgress => "IN_PROGRESS",
                ProjectStatus::Completed => "COMPLETED",
                ProjectStatus::OnHold => "ON_HOLD",
                ProjectStatus::Unknown => "UNKNOWN",
            }
        }

        pub fn from_wire(value: &str) -> ProjectStatus {
            match value {
                "PENDING" => ProjectStatus::Pending,
                "ACTIVE" => ProjectStatus::Active,
                "IN_PROGRESS" => ProjectStatus::InProgress,
                "COMPLETED" => ProjectStatus::Completed,
                "ON_HOLD" => ProjectStatus::OnHold,
                _ => ProjectStatus::Unknown,
            }
        }

        pub fn label(&self) -> &'static str {
            match self {
                ProjectStatus::Pending => "Pending",
                ProjectStatus::Active => "Active",
                ProjectStatus::InProgress => "In Progress",
                ProjectStatus::Completed => "Completed",
                ProjectStatus::OnHold => "On Hold",
                ProjectStatus::Unknown => "Unknown",
            }
        }

        pub fn badge_class(&self) -> &'static str {
            match self {
                ProjectStatus::Active | ProjectStatus::InProgress => {
                    "bg-green-100 text-green-800"
                }
                ProjectStatus::Pending => "bg-yellow-100 text-yellow-800",
                ProjectStatus::OnHold => "bg-amber-100 text-amber-800",
                ProjectStatus::Completed | ProjectStatus::Unknown => {
                    "bg-gray-100 text-gray-800"
                }
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ClientRef {
        pub id: i64,
        pub name: String,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Project {
        pub id: i64,
        pub name: String,
        #[serde(default)]
        pub description: Option<String>,
        pub status: ProjectStatus,
        #[serde(default)]
        pub due_amount: String,
        #[serde(default)]
        pub final_payment_date: Option<String>,
        pub client: ClientRef,
        #[serde(default)]
        pub access_key: Option<String>,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SaveProjectRequest {
        pub name: String,
        pub client_id: i64,
        pub status: ProjectStatus,
        pub due_amount: String,
        pub final_payment_date: String,
        pub description: String,
    }

    pub async fn list() -> ApiResult<Vec<Project>> {
        ApiClient::get("/projects/all").await
    }

    pub async fn create(request: &SaveProjectRequest) -> ApiResult<Project> {
        ApiClient::post("/projects", request).await
    }

    pub async fn update(id: i64, request: &SaveProjectRequest) -> ApiResult<Project> {
        ApiClient::put(&format!("/projects/{}", id), request).await
    }

    pub async fn delete(id: i64) -> ApiResult<()> {
        ApiClient::delete(&format!("/projects/{}", id)).await
    }
}

// ============================================
// PAYMENTS SERVICE
// ============================================

pub mod payments {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub enum PaymentStatus {
        Paid,
        Due,
        Upcoming,
        #[serde(other)]
        Unknown,
    }

    impl PaymentStatus {
        pub fn label(&self) -> &'static str {
            match self {
                PaymentStatus::Paid => "Paid",
                PaymentStatus::Due => "Due",
                PaymentStatus::Upcoming => "Upcoming",
                PaymentStatus::Unknown => "Unknown",
            }
        }

        pub fn badge_class(&self) -> &'static str {
            match self {
                PaymentStatus::Paid => "bg-green-100 text-green-800",
                PaymentStatus::Due => "bg-red-100 text-red-800",
                PaymentStatus::Upcoming => "bg-blue-100 text-blue-800",
                PaymentStatus::Unknown => "bg-gray-100 text-gray-800",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Payment {
        pub id: i64,
        pub project: String,
        pub client: String,
        pub date: String,
        pub amount: String,
        pub status: PaymentStatus,
    }

    pub async fn list() -> ApiResult<Vec<Payment>> {
        ApiClient::get("/payments").await
    }
}

#[cfg(test)]
mod tests {
    use super::auth::RegisterRequest;
    use super::clients::Client;
    use super::payments::PaymentStatus;
    use super::projects::{Project, ProjectStatus, SaveProjectRequest};

    #[test]
    fn project_status_round_trips_through_wire_names() {
        for status in ProjectStatus::all() {
            assert_eq!(ProjectStatus::from_wire(status.as_wire()), status);
        }
        assert_eq!(ProjectStatus::from_wire("ARCHIVED"), ProjectStatus::Unknown);
    }

    #[test]
    fn unrecognized_project_status_deserializes_to_unknown() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Landing Page",
            "status": "ARCHIVED",
            "dueAmount": "$500",
            "finalPaymentDate": "2025-09-01",
            "client": { "id": 2, "name": "Acme Corp" }
        }))
        .unwrap();

        assert_eq!(project.status, ProjectStatus::Unknown);
        assert_eq!(project.client.name, "Acme Corp");
        assert_eq!(project.access_key, None);
    }

    #[test]
    fn project_status_badges_cover_every_value() {
        assert_eq!(ProjectStatus::Active.badge_class(), "bg-green-100 text-green-800");
        assert_eq!(ProjectStatus::InProgress.badge_class(), "bg-green-100 text-green-800");
        assert_eq!(ProjectStatus::Pending.badge_class(), "bg-yellow-100 text-yellow-800");
        assert_eq!(ProjectStatus::OnHold.badge_class(), "bg-amber-100 text-amber-800");
        assert_eq!(ProjectStatus::Completed.badge_class(), "bg-gray-100 text-gray-800");
        assert_eq!(ProjectStatus::Unknown.badge_class(), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn unrecognized_payment_status_falls_back_to_unknown() {
        let status: PaymentStatus = serde_json::from_value(serde_json::json!("Refunded")).unwrap();
        assert_eq!(status, PaymentStatus::Unknown);
        assert_eq!(status.badge_class(), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn client_without_relation_count_defaults_to_zero() {
        let client: Client = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Northwind",
            "email": "billing@northwind.test"
        }))
        .unwrap();

        assert_eq!(client.counts.projects, 0);
    }

    #[test]
    fn save_project_request_uses_camel_case_fields() {
        let request = SaveProjectRequest {
            name: "Website Redesign".to_string(),
            client_id: 4,
            status: ProjectStatus::Active,
            due_amount: "$2,500".to_string(),
            final_payment_date: "2025-10-15".to_string(),
            description: String::new(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["clientId"], 4);
        assert_eq!(value["dueAmount"], "$2,500");
        assert_eq!(value["finalPaymentDate"], "2025-10-15");
        assert_eq!(value["status"], "ACTIVE");
    }

    #[test]
    fn register_request_omits_unassigned_client() {
        let request = RegisterRequest {
            username: "client-portal".to_string(),
            password: "hunter2".to_string(),
            role: "client".to_string(),
            assigned_client_id: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("assignedClientId").is_none());

        let assigned = RegisterRequest {
            assigned_client_id: Some(9),
            ..request
        };
        let value = serde_json::to_value(&assigned).unwrap();
        assert_eq!(value["assignedClientId"], 9);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn session_storage_round_trip() {
        let user = SessionUser {
            name: "Admin".to_string(),
            email: Some("admin@example.com".to_string()),
            role: Some("admin".to_string()),
        };

        ApiClient::set_session("abc123", &user);
        assert_eq!(ApiClient::get_auth_token().as_deref(), Some("abc123"));
        assert_eq!(ApiClient::get_cached_user(), Some(user));

        ApiClient::clear_session();
        assert!(ApiClient::get_auth_token().is_none());
        assert_eq!(ApiClient::get_cached_user(), None);
    }
}
