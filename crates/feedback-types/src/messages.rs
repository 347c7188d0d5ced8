//! User-facing strings shared by the server and the client.
//!
//! The board is Korean-language; server errors stay generic so internals
//! never leak to the user.

/// Body of every 500 response.
pub const SERVER_ERROR: &str = "서버 오류가 발생했습니다.";

pub const NAME_REQUIRED: &str = "이름을 입력해주세요.";
pub const CONTENT_REQUIRED: &str = "의견을 입력해주세요.";

/// Used when a 400 carries no usable message.
pub const CHECK_INPUT: &str = "입력값을 확인해주세요.";

pub const LIST_FAILED: &str = "피드백 목록을 불러오는데 실패했습니다.";
pub const CREATE_FAILED: &str = "피드백 등록에 실패했습니다.";

pub const CREATED_TITLE: &str = "의견이 등록되었습니다!";
pub const CREATED_DESCRIPTION: &str = "소중한 의견 감사드립니다. 앱 개선에 큰 도움이 됩니다.";
pub const CREATE_ERROR_TITLE: &str = "등록 실패";

pub const EMPTY_BOARD: &str = "첫 번째 의견을 남겨주세요!";
pub const JUST_NOW: &str = "방금 전";

/// A create is already in flight for this board.
pub const SUBMIT_IN_PROGRESS: &str = "의견을 등록하는 중입니다.";
