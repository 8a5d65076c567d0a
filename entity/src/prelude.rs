pub use super::article::Entity as Article;
pub use super::article_category::Entity as ArticleCategory;
pub use super::article_tag::Entity as ArticleTag;
pub use super::article_translation::Entity as ArticleTranslation;
pub use super::category::Entity as Category;
pub use super::category_translation::Entity as CategoryTranslation;
pub use super::image::Entity as Image;
pub use super::language::Entity as Language;
pub use super::setting::Entity as Setting;
pub use super::setting_translation::Entity as SettingTranslation;
pub use super::tag::Entity as Tag;
pub use super::tag_translation::Entity as TagTranslation;
pub use super::user::Entity as User;
