use wd_service::users::NewUser;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            username: r.username,
            password: r.password,
            roles: r.roles,
        }
    }
}
