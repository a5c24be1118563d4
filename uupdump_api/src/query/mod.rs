mod common;
pub use self::common::{Query, RequestType};

mod list_id;
pub use self::list_id::ListIdQuery;

mod fetch_update;
pub use self::fetch_update::FetchUpdateQuery;

mod get_files;
pub use self::get_files::GetFilesQuery;

mod list_langs;
pub use self::list_langs::ListLangsQuery;

mod list_editions;
pub use self::list_editions::ListEditionsQuery;

mod update_info;
pub use self::update_info::UpdateInfoQuery;
