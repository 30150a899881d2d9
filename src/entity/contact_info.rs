use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub address: String,
    pub phone: String,
    pub telegram_link: String,
    pub telegram_username: String,
    pub facebook_link: String,
    pub instagram_link: String,
    pub twitter_link: String,
    pub show_social_icons: bool,
    pub weekday_hours: String,
    pub weekend_hours: String,
    pub time_zone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
