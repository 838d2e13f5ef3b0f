use std::fmt;

#[derive(Debug, Clone)]
pub enum VaultError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    InvalidUrl(String),
    NotFound(String),
    Serialization(String),
    FileOperation(String),
    Config(String),
}

impl VaultError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            VaultError::DatabaseConfig(_) => "E001",
            VaultError::DatabaseConnection(_) => "E002",
            VaultError::DatabaseOperation(_) => "E003",
            VaultError::Validation(_) => "E004",
            VaultError::InvalidUrl(_) => "E005",
            VaultError::NotFound(_) => "E006",
            VaultError::Serialization(_) => "E007",
            VaultError::FileOperation(_) => "E008",
            VaultError::Config(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            VaultError::DatabaseConfig(_) => "Database Configuration Error",
            VaultError::DatabaseConnection(_) => "Database Connection Error",
            VaultError::DatabaseOperation(_) => "Database Operation Error",
            VaultError::Validation(_) => "Validation Error",
            VaultError::InvalidUrl(_) => "Invalid URL",
            VaultError::NotFound(_) => "Resource Not Found",
            VaultError::Serialization(_) => "Serialization Error",
            VaultError::FileOperation(_) => "File Operation Error",
            VaultError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            VaultError::DatabaseConfig(msg)
            | VaultError::DatabaseConnection(msg)
            | VaultError::DatabaseOperation(msg)
            | VaultError::Validation(msg)
            | VaultError::InvalidUrl(msg)
            | VaultError::NotFound(msg)
            | VaultError::Serialization(msg)
            | VaultError::FileOperation(msg)
            | VaultError::Config(msg) => msg,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, VaultError::NotFound(_))
    }
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for VaultError {}

// 便捷的构造函数
impl VaultError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        VaultError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        VaultError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        VaultError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        VaultError::Validation(msg.into())
    }

    pub fn invalid_url<T: Into<String>>(msg: T) -> Self {
        VaultError::InvalidUrl(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        VaultError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        VaultError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        VaultError::FileOperation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        VaultError::Config(msg.into())
    }
}

impl From<sea_orm::DbErr> for VaultError {
    fn from(err: sea_orm::DbErr) -> Self {
        VaultError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        VaultError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        VaultError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for VaultError {
    fn from(err: toml::ser::Error) -> Self {
        VaultError::Serialization(err.to_string())
    }
}

impl From<crate::utils::url_validator::UrlValidationError> for VaultError {
    fn from(err: crate::utils::url_validator::UrlValidationError) -> Self {
        VaultError::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VaultError>;
