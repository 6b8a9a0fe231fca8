use crate::model::{id::AccountId, image::Image};

// パスワードはこの型に含めない
// 呼び出し側へ返る経路にパスワードが乗らないことを型で保証する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub account_id: AccountId,
    pub email: String,
    pub profile: Option<Profile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub image: Option<Image>,
}
