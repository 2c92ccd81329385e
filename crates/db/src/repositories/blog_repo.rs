//! Repository for blog posts and their fixed-slot groups.
//!
//! Creation derives the slug from the title when absent and hydrates
//! omitted slot groups with defaults. Updates patch scalar fields
//! individually; the section block and slot groups replace wholesale
//! when the payload carries them.

use sqlx::{PgPool, Postgres, Transaction};
use yume_core::slug::{next_available, slugify};
use yume_core::types::DbId;

use crate::models::blog::{
    default_applications, default_features, default_related_courses, default_stats,
    BlogApplication, BlogApplicationInput, BlogFeature, BlogFeatureInput, BlogPost, BlogPostPage,
    BlogRelatedCourse, BlogRelatedCourseInput, BlogSectionFields, BlogStat, BlogStatInput,
    CreateBlogPost, UpdateBlogPost,
};

const SECTION_COLUMNS: &str = "show_section_1, section_1_title, section_1_content, \
    show_section_2, section_2_title, show_section_3, section_3_title, show_section_4, \
    section_4_title, section_4_content, show_cta, cta_title, cta_description, cta_button_text, \
    cta_button_link, show_social_share, social_share_title, social_share_description, \
    show_facebook_share, show_twitter_share, show_linkedin_share, show_blog_navigation, \
    previous_nav_label, previous_nav_text, previous_nav_link, next_nav_label, next_nav_text, \
    next_nav_link, is_previous_external, is_next_external, show_social_section, \
    social_section_title, social_description, instagram_url, facebook_url, linkedin_url, \
    show_courses_section, courses_section_title, show_categories_section, \
    categories_section_title, excel_count, sql_count, python_count, azure_count, career_count";

fn post_columns() -> String {
    format!(
        "id, title, category, excerpt, featured_image, publish_date, author_name, author_role, \
         read_time, is_published, featured, sort_order, slug, {SECTION_COLUMNS}, created_at, \
         updated_at"
    )
}

/// Bind the 45 section fields in declaration order.
macro_rules! bind_sections {
    ($query:expr, $s:expr) => {
        $query
            .bind($s.show_section_1)
            .bind(&$s.section_1_title)
            .bind(&$s.section_1_content)
            .bind($s.show_section_2)
            .bind(&$s.section_2_title)
            .bind($s.show_section_3)
            .bind(&$s.section_3_title)
            .bind($s.show_section_4)
            .bind(&$s.section_4_title)
            .bind(&$s.section_4_content)
            .bind($s.show_cta)
            .bind(&$s.cta_title)
            .bind(&$s.cta_description)
            .bind(&$s.cta_button_text)
            .bind(&$s.cta_button_link)
            .bind($s.show_social_share)
            .bind(&$s.social_share_title)
            .bind(&$s.social_share_description)
            .bind($s.show_facebook_share)
            .bind($s.show_twitter_share)
            .bind($s.show_linkedin_share)
            .bind($s.show_blog_navigation)
            .bind(&$s.previous_nav_label)
            .bind(&$s.previous_nav_text)
            .bind(&$s.previous_nav_link)
            .bind(&$s.next_nav_label)
            .bind(&$s.next_nav_text)
            .bind(&$s.next_nav_link)
            .bind($s.is_previous_external)
            .bind($s.is_next_external)
            .bind($s.show_social_section)
            .bind(&$s.social_section_title)
            .bind(&$s.social_description)
            .bind(&$s.instagram_url)
            .bind(&$s.facebook_url)
            .bind(&$s.linkedin_url)
            .bind($s.show_courses_section)
            .bind(&$s.courses_section_title)
            .bind($s.show_categories_section)
            .bind(&$s.categories_section_title)
            .bind($s.excel_count)
            .bind($s.sql_count)
            .bind($s.python_count)
            .bind($s.azure_count)
            .bind($s.career_count)
    };
}

/// Placeholder list `$start..$start+44` for the section columns.
fn section_placeholders(start: usize) -> String {
    (start..start + 45)
        .map(|n| format!("${n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a post with its slot groups, deriving the slug from the
    /// title when absent. Omitted slot groups get the defaults.
    pub async fn create(pool: &PgPool, input: &CreateBlogPost) -> Result<BlogPost, sqlx::Error> {
        let slug = match &input.slug {
            Some(explicit) => explicit.clone(),
            None => {
                let base = slugify(&input.title);
                let taken: Vec<String> = sqlx::query_scalar(
                    "SELECT slug FROM blog_posts WHERE slug = $1 OR slug LIKE $1 || '-%'",
                )
                .bind(&base)
                .fetch_all(pool)
                .await?;
                next_available(&base, &taken)
            }
        };

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO blog_posts (title, category, excerpt, featured_image, publish_date,
                                     author_name, author_role, read_time, is_published,
                                     featured, sort_order, slug, {SECTION_COLUMNS})
             VALUES ($1, COALESCE($2, 'tech_training'), COALESCE($3, ''), COALESCE($4, ''),
                     $5, COALESCE($6, 'YuMe Learning Team'),
                     COALESCE($7, 'Professional Development Experts'),
                     COALESCE($8, '5 min read'), COALESCE($9, TRUE), COALESCE($10, FALSE),
                     COALESCE($11, 0), $12, {placeholders})
             RETURNING {columns}",
            placeholders = section_placeholders(13),
            columns = post_columns()
        );
        let insert = sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.excerpt)
            .bind(&input.featured_image)
            .bind(input.publish_date)
            .bind(&input.author_name)
            .bind(&input.author_role)
            .bind(&input.read_time)
            .bind(input.is_published)
            .bind(input.featured)
            .bind(input.sort_order)
            .bind(&slug);
        let post = bind_sections!(insert, input.sections)
            .fetch_one(&mut *tx)
            .await?;

        let features = input.features.clone().unwrap_or_else(default_features);
        Self::write_features(&mut tx, post.id, &features).await?;

        let applications = input
            .applications
            .clone()
            .unwrap_or_else(default_applications);
        Self::write_applications(&mut tx, post.id, &applications).await?;

        let stats = input.stats.clone().unwrap_or_else(default_stats);
        Self::write_stats(&mut tx, post.id, &stats).await?;

        let related = input
            .related_courses
            .clone()
            .unwrap_or_else(default_related_courses);
        Self::write_related_courses(&mut tx, post.id, &related).await?;

        tx.commit().await?;
        Ok(post)
    }

    pub async fn list_published(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM blog_posts WHERE is_published
             ORDER BY sort_order ASC, publish_date DESC, id DESC",
            post_columns()
        );
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM blog_posts ORDER BY sort_order ASC, publish_date DESC, id DESC",
            post_columns()
        );
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {} FROM blog_posts WHERE id = $1", post_columns());
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug_published(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM blog_posts WHERE slug = $1 AND is_published",
            post_columns()
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Patch a post. Scalar fields update individually; when present,
    /// the section block and each slot group replace wholesale. The
    /// slug never changes.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE blog_posts SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                excerpt = COALESCE($4, excerpt),
                featured_image = COALESCE($5, featured_image),
                publish_date = COALESCE($6, publish_date),
                author_name = COALESCE($7, author_name),
                author_role = COALESCE($8, author_role),
                read_time = COALESCE($9, read_time),
                is_published = COALESCE($10, is_published),
                featured = COALESCE($11, featured),
                sort_order = COALESCE($12, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            post_columns()
        );
        let Some(mut post) = sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.excerpt)
            .bind(&input.featured_image)
            .bind(input.publish_date)
            .bind(&input.author_name)
            .bind(&input.author_role)
            .bind(&input.read_time)
            .bind(input.is_published)
            .bind(input.featured)
            .bind(input.sort_order)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(sections) = &input.sections {
            post = Self::replace_sections(&mut tx, id, sections).await?;
        }
        if let Some(features) = &input.features {
            Self::write_features(&mut tx, id, features).await?;
        }
        if let Some(applications) = &input.applications {
            Self::write_applications(&mut tx, id, applications).await?;
        }
        if let Some(stats) = &input.stats {
            Self::write_stats(&mut tx, id, stats).await?;
        }
        if let Some(related) = &input.related_courses {
            Self::write_related_courses(&mut tx, id, related).await?;
        }

        tx.commit().await?;
        Ok(Some(post))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// A published post with all slot groups, keyed by slug.
    pub async fn page_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BlogPostPage>, sqlx::Error> {
        let Some(post) = Self::find_by_slug_published(pool, slug).await? else {
            return Ok(None);
        };

        let features = sqlx::query_as::<_, BlogFeature>(
            "SELECT id, post_id, slot, title, icon, content
             FROM blog_features WHERE post_id = $1 ORDER BY slot ASC",
        )
        .bind(post.id)
        .fetch_all(pool)
        .await?;

        let applications = sqlx::query_as::<_, BlogApplication>(
            "SELECT id, post_id, slot, text
             FROM blog_applications WHERE post_id = $1 ORDER BY slot ASC",
        )
        .bind(post.id)
        .fetch_all(pool)
        .await?;

        let stats = sqlx::query_as::<_, BlogStat>(
            "SELECT id, post_id, slot, number, label
             FROM blog_stats WHERE post_id = $1 ORDER BY slot ASC",
        )
        .bind(post.id)
        .fetch_all(pool)
        .await?;

        let related_courses = sqlx::query_as::<_, BlogRelatedCourse>(
            "SELECT id, post_id, slot, title, description, link
             FROM blog_related_courses WHERE post_id = $1 ORDER BY slot ASC",
        )
        .bind(post.id)
        .fetch_all(pool)
        .await?;

        Ok(Some(BlogPostPage {
            post,
            features,
            applications,
            stats,
            related_courses,
        }))
    }

    async fn replace_sections(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        sections: &BlogSectionFields,
    ) -> Result<BlogPost, sqlx::Error> {
        let assignments = SECTION_COLUMNS
            .split(", ")
            .enumerate()
            .map(|(i, col)| format!("{} = ${}", col.trim(), i + 2))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "UPDATE blog_posts SET {assignments}, updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            post_columns()
        );
        let update = sqlx::query_as::<_, BlogPost>(&query).bind(id);
        bind_sections!(update, sections).fetch_one(&mut **tx).await
    }

    async fn write_features(
        tx: &mut Transaction<'_, Postgres>,
        post_id: DbId,
        features: &[BlogFeatureInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM blog_features WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut **tx)
            .await?;
        for (i, f) in features.iter().take(4).enumerate() {
            sqlx::query(
                "INSERT INTO blog_features (post_id, slot, title, icon, content)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(post_id)
            .bind(i as i32 + 1)
            .bind(&f.title)
            .bind(&f.icon)
            .bind(&f.content)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn write_applications(
        tx: &mut Transaction<'_, Postgres>,
        post_id: DbId,
        applications: &[BlogApplicationInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM blog_applications WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut **tx)
            .await?;
        for (i, a) in applications.iter().take(5).enumerate() {
            sqlx::query(
                "INSERT INTO blog_applications (post_id, slot, text) VALUES ($1, $2, $3)",
            )
            .bind(post_id)
            .bind(i as i32 + 1)
            .bind(&a.text)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn write_stats(
        tx: &mut Transaction<'_, Postgres>,
        post_id: DbId,
        stats: &[BlogStatInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM blog_stats WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut **tx)
            .await?;
        for (i, s) in stats.iter().take(3).enumerate() {
            sqlx::query(
                "INSERT INTO blog_stats (post_id, slot, number, label) VALUES ($1, $2, $3, $4)",
            )
            .bind(post_id)
            .bind(i as i32 + 1)
            .bind(&s.number)
            .bind(&s.label)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn write_related_courses(
        tx: &mut Transaction<'_, Postgres>,
        post_id: DbId,
        courses: &[BlogRelatedCourseInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM blog_related_courses WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut **tx)
            .await?;
        for (i, c) in courses.iter().take(3).enumerate() {
            sqlx::query(
                "INSERT INTO blog_related_courses (post_id, slot, title, description, link)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(post_id)
            .bind(i as i32 + 1)
            .bind(&c.title)
            .bind(&c.description)
            .bind(&c.link)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}
