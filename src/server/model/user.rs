pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub admin: bool,
}
