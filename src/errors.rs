use std::fmt;

#[derive(Debug, Clone)]
pub enum SnaplinkError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    DuplicateCode(String),
    NotFound(String),
    FileOperation(String),
}

impl SnaplinkError {
    pub fn code(&self) -> &'static str {
        match self {
            SnaplinkError::DatabaseConfig(_) => "E001",
            SnaplinkError::DatabaseConnection(_) => "E002",
            SnaplinkError::DatabaseOperation(_) => "E003",
            SnaplinkError::DuplicateCode(_) => "E004",
            SnaplinkError::NotFound(_) => "E005",
            SnaplinkError::FileOperation(_) => "E006",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            SnaplinkError::DatabaseConfig(_) => "Database Configuration Error",
            SnaplinkError::DatabaseConnection(_) => "Database Connection Error",
            SnaplinkError::DatabaseOperation(_) => "Database Operation Error",
            SnaplinkError::DuplicateCode(_) => "Duplicate Short Code",
            SnaplinkError::NotFound(_) => "Resource Not Found",
            SnaplinkError::FileOperation(_) => "File Operation Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SnaplinkError::DatabaseConfig(msg) => msg,
            SnaplinkError::DatabaseConnection(msg) => msg,
            SnaplinkError::DatabaseOperation(msg) => msg,
            SnaplinkError::DuplicateCode(msg) => msg,
            SnaplinkError::NotFound(msg) => msg,
            SnaplinkError::FileOperation(msg) => msg,
        }
    }
}

impl fmt::Display for SnaplinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for SnaplinkError {}

// Convenience constructors
impl SnaplinkError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::DatabaseOperation(msg.into())
    }

    pub fn duplicate_code<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::DuplicateCode(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::NotFound(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::FileOperation(msg.into())
    }
}

impl From<sea_orm::DbErr> for SnaplinkError {
    fn from(err: sea_orm::DbErr) -> Self {
        SnaplinkError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SnaplinkError {
    fn from(err: std::io::Error) -> Self {
        SnaplinkError::FileOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SnaplinkError>;
