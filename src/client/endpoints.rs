//! Backend endpoint paths

pub const LOGIN: &str = "/v1/auth/login";
pub const REGISTER: &str = "/v1/auth/register";
pub const FORGOT_PASSWORD: &str = "/v1/auth/forgot-password";
pub const PROFILE: &str = "/v1/user/profile";

pub const POST_LIST: &str = "/v1/post/list";

pub const COMMENT_CREATE: &str = "/v1/comment/create";
pub const COMMENT_LIST: &str = "/v1/comment/list";

pub const FILE_UPLOAD: &str = "/v1/file/upload";
