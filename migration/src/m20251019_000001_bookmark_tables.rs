use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 categories 表
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Category::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Category::UserId).string().not_null())
                    .col(ColumnDef::new(Category::Name).string().not_null())
                    .col(ColumnDef::new(Category::Color).string().not_null())
                    .col(
                        ColumnDef::new(Category::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建 tags 表
        manager
            .create_table(
                Table::create()
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tag::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Tag::UserId).string().not_null())
                    .col(ColumnDef::new(Tag::Name).string().not_null())
                    .col(
                        ColumnDef::new(Tag::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建 links 表，删除分类时 category_id 置空
        manager
            .create_table(
                Table::create()
                    .table(Link::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Link::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Link::UserId).string().not_null())
                    .col(ColumnDef::new(Link::Title).string().not_null())
                    .col(ColumnDef::new(Link::Url).text().not_null())
                    .col(ColumnDef::new(Link::Description).text().null())
                    .col(ColumnDef::new(Link::CategoryId).string().null())
                    .col(
                        ColumnDef::new(Link::IsFavorite)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Link::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Link::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_links_category")
                            .from(Link::Table, Link::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建 link_tags 关联表
        manager
            .create_table(
                Table::create()
                    .table(LinkTag::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LinkTag::LinkId).string().not_null())
                    .col(ColumnDef::new(LinkTag::TagId).string().not_null())
                    .primary_key(Index::create().col(LinkTag::LinkId).col(LinkTag::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_link_tags_link")
                            .from(LinkTag::Table, LinkTag::LinkId)
                            .to(Link::Table, Link::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_link_tags_tag")
                            .from(LinkTag::Table, LinkTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 列表查询按 user_id + created_at 排序
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_links_user_created")
                    .table(Link::Table)
                    .col(Link::UserId)
                    .col(Link::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_categories_user")
                    .table(Category::Table)
                    .col(Category::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tags_user")
                    .table(Tag::Table)
                    .col(Tag::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_link_tags_tag")
                    .table(LinkTag::Table)
                    .col(LinkTag::TagId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LinkTag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Link::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Category {
    #[sea_orm(iden = "categories")]
    Table,
    Id,
    UserId,
    Name,
    Color,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tag {
    #[sea_orm(iden = "tags")]
    Table,
    Id,
    UserId,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Link {
    #[sea_orm(iden = "links")]
    Table,
    Id,
    UserId,
    Title,
    Url,
    Description,
    CategoryId,
    IsFavorite,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LinkTag {
    #[sea_orm(iden = "link_tags")]
    Table,
    LinkId,
    TagId,
}
