//! Repositories for project cards and their detail pages.
//!
//! Detail pages are written as a full replacement inside a transaction:
//! the scalar row is upserted and every slot group is deleted and
//! re-inserted. Slot groups the payload omits are hydrated with the
//! default slots from the model module.

use sqlx::{PgPool, Postgres, Transaction};
use yume_core::slug::{next_available, slugify};
use yume_core::types::DbId;

use crate::models::project::{
    default_certification_features, default_components, default_highlights,
    default_impact_metrics, default_outcomes, default_partner_badges, default_partners,
    default_role_items, default_support_features, student_count_display, ComponentInput,
    CreateProjectCard, FeatureItemInput, HighlightInput, ImpactMetricInput, OutcomeInput,
    PartnerBadgeInput, PartnerInput, ProjectCard, ProjectComponent, ProjectDetail,
    ProjectDetailInput, ProjectDetailView, ProjectFeatureItem, ProjectHighlight,
    ProjectImpactMetric, ProjectOutcome, ProjectPage, ProjectPartner, ProjectPartnerBadge,
    ProjectRoleItem, RoleItemInput, UpdateProjectCard,
};

const CARD_COLUMNS: &str = "id, project_name, tagline, category, duration, thumbnail_image, \
                            short_description, sort_order, is_active, slug, created_at, \
                            updated_at";

const DETAIL_COLUMNS: &str = "id, card_id, badge_text, launch_date_badge, duration_hours, \
    student_count, location, hero_image, target_audience, detailed_content, show_partners, \
    show_program_overview, program_overview_title, program_overview_content, \
    implementing_partner_name, overview_partner_2, overview_partner_3, program_objective, \
    learning_approach_title, learning_approach_main, learning_approach_sub, \
    learning_approach_icon, show_program_components, components_title, show_role_impact, \
    role_title, role_description, impact_title, impact_main_number, impact_main_text, \
    show_certification_support, certification_title, certification_subtitle, \
    certification_description, certification_icon, certification_color, support_title, \
    support_subtitle, support_description, support_icon, support_color, \
    show_sustainable_pathways, pathways_title, pathways_description, highlights_title, \
    created_at, updated_at";

pub struct ProjectCardRepo;

impl ProjectCardRepo {
    /// Insert a card. When no slug is supplied one is derived from the
    /// project name, de-duplicated against existing slugs with a
    /// numeric suffix.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectCard,
    ) -> Result<ProjectCard, sqlx::Error> {
        let slug = match &input.slug {
            Some(explicit) => explicit.clone(),
            None => {
                let base = slugify(&input.project_name);
                let taken: Vec<String> = sqlx::query_scalar(
                    "SELECT slug FROM project_cards WHERE slug = $1 OR slug LIKE $1 || '-%'",
                )
                .bind(&base)
                .fetch_all(pool)
                .await?;
                next_available(&base, &taken)
            }
        };

        let query = format!(
            "INSERT INTO project_cards (project_name, tagline, category, duration,
                                        thumbnail_image, short_description, sort_order,
                                        is_active, slug)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''),
                     COALESCE($5, ''), COALESCE($6, ''), COALESCE($7, 0),
                     COALESCE($8, TRUE), $9)
             RETURNING {CARD_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectCard>(&query)
            .bind(&input.project_name)
            .bind(&input.tagline)
            .bind(&input.category)
            .bind(&input.duration)
            .bind(&input.thumbnail_image)
            .bind(&input.short_description)
            .bind(input.sort_order)
            .bind(input.is_active)
            .bind(&slug)
            .fetch_one(pool)
            .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<ProjectCard>, sqlx::Error> {
        let query = format!(
            "SELECT {CARD_COLUMNS} FROM project_cards WHERE is_active
             ORDER BY sort_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, ProjectCard>(&query).fetch_all(pool).await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<ProjectCard>, sqlx::Error> {
        let query = format!(
            "SELECT {CARD_COLUMNS} FROM project_cards ORDER BY sort_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, ProjectCard>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectCard>, sqlx::Error> {
        let query = format!("SELECT {CARD_COLUMNS} FROM project_cards WHERE id = $1");
        sqlx::query_as::<_, ProjectCard>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug_active(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<ProjectCard>, sqlx::Error> {
        let query = format!("SELECT {CARD_COLUMNS} FROM project_cards WHERE slug = $1 AND is_active");
        sqlx::query_as::<_, ProjectCard>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Update a card. The slug never changes, even when `project_name`
    /// does.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProjectCard,
    ) -> Result<Option<ProjectCard>, sqlx::Error> {
        let query = format!(
            "UPDATE project_cards SET
                project_name = COALESCE($2, project_name),
                tagline = COALESCE($3, tagline),
                category = COALESCE($4, category),
                duration = COALESCE($5, duration),
                thumbnail_image = COALESCE($6, thumbnail_image),
                short_description = COALESCE($7, short_description),
                sort_order = COALESCE($8, sort_order),
                is_active = COALESCE($9, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {CARD_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectCard>(&query)
            .bind(id)
            .bind(&input.project_name)
            .bind(&input.tagline)
            .bind(&input.category)
            .bind(&input.duration)
            .bind(&input.thumbnail_image)
            .bind(&input.short_description)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_cards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The public project page for an active card: the card plus its
    /// detail page (with slot groups) when one exists.
    pub async fn page_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<ProjectPage>, sqlx::Error> {
        let Some(card) = Self::find_by_slug_active(pool, slug).await? else {
            return Ok(None);
        };
        let detail = ProjectDetailRepo::view_for_card(pool, card.id).await?;
        Ok(Some(ProjectPage { card, detail }))
    }
}

pub struct ProjectDetailRepo;

impl ProjectDetailRepo {
    /// Replace the detail page for a card: upsert the scalar row, then
    /// rewrite every slot group. Groups the payload omits get the
    /// default slots. Runs in one transaction.
    pub async fn replace(
        pool: &PgPool,
        card_id: DbId,
        input: &ProjectDetailInput,
    ) -> Result<ProjectDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let detail = Self::upsert_scalar(&mut tx, card_id, input).await?;

        let partners = input.partners.clone().unwrap_or_else(default_partners);
        Self::write_partners(&mut tx, detail.id, &partners).await?;

        let components = input.components.clone().unwrap_or_else(default_components);
        Self::write_components(&mut tx, detail.id, &components).await?;

        let role_items = input.role_items.clone().unwrap_or_else(default_role_items);
        Self::write_role_items(&mut tx, detail.id, &role_items).await?;

        let metrics = input
            .impact_metrics
            .clone()
            .unwrap_or_else(default_impact_metrics);
        Self::write_impact_metrics(&mut tx, detail.id, &metrics).await?;

        let outcomes = input.outcomes.clone().unwrap_or_else(default_outcomes);
        Self::write_outcomes(&mut tx, detail.id, &outcomes).await?;

        let cert_features = input
            .certification_features
            .clone()
            .unwrap_or_else(default_certification_features);
        Self::write_features(&mut tx, detail.id, "certification", &cert_features).await?;

        let support_features = input
            .support_features
            .clone()
            .unwrap_or_else(default_support_features);
        Self::write_features(&mut tx, detail.id, "support", &support_features).await?;

        let badges = input
            .partner_badges
            .clone()
            .unwrap_or_else(default_partner_badges);
        Self::write_partner_badges(&mut tx, detail.id, &badges).await?;

        let highlights = input.highlights.clone().unwrap_or_else(default_highlights);
        Self::write_highlights(&mut tx, detail.id, &highlights).await?;

        tx.commit().await?;
        Ok(detail)
    }

    async fn upsert_scalar(
        tx: &mut Transaction<'_, Postgres>,
        card_id: DbId,
        input: &ProjectDetailInput,
    ) -> Result<ProjectDetail, sqlx::Error> {
        let f = &input.fields;
        let query = format!(
            "INSERT INTO project_details (card_id, badge_text, launch_date_badge,
                 duration_hours, student_count, location, hero_image, target_audience,
                 detailed_content, show_partners, show_program_overview,
                 program_overview_title, program_overview_content, implementing_partner_name,
                 overview_partner_2, overview_partner_3, program_objective,
                 learning_approach_title, learning_approach_main, learning_approach_sub,
                 learning_approach_icon, show_program_components, components_title,
                 show_role_impact, role_title, role_description, impact_title,
                 impact_main_number, impact_main_text, show_certification_support,
                 certification_title, certification_subtitle, certification_description,
                 certification_icon, certification_color, support_title, support_subtitle,
                 support_description, support_icon, support_color, show_sustainable_pathways,
                 pathways_title, pathways_description, highlights_title)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                     $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30,
                     $31, $32, $33, $34, $35, $36, $37, $38, $39, $40, $41, $42, $43, $44)
             ON CONFLICT (card_id) DO UPDATE SET
                 badge_text = EXCLUDED.badge_text,
                 launch_date_badge = EXCLUDED.launch_date_badge,
                 duration_hours = EXCLUDED.duration_hours,
                 student_count = EXCLUDED.student_count,
                 location = EXCLUDED.location,
                 hero_image = EXCLUDED.hero_image,
                 target_audience = EXCLUDED.target_audience,
                 detailed_content = EXCLUDED.detailed_content,
                 show_partners = EXCLUDED.show_partners,
                 show_program_overview = EXCLUDED.show_program_overview,
                 program_overview_title = EXCLUDED.program_overview_title,
                 program_overview_content = EXCLUDED.program_overview_content,
                 implementing_partner_name = EXCLUDED.implementing_partner_name,
                 overview_partner_2 = EXCLUDED.overview_partner_2,
                 overview_partner_3 = EXCLUDED.overview_partner_3,
                 program_objective = EXCLUDED.program_objective,
                 learning_approach_title = EXCLUDED.learning_approach_title,
                 learning_approach_main = EXCLUDED.learning_approach_main,
                 learning_approach_sub = EXCLUDED.learning_approach_sub,
                 learning_approach_icon = EXCLUDED.learning_approach_icon,
                 show_program_components = EXCLUDED.show_program_components,
                 components_title = EXCLUDED.components_title,
                 show_role_impact = EXCLUDED.show_role_impact,
                 role_title = EXCLUDED.role_title,
                 role_description = EXCLUDED.role_description,
                 impact_title = EXCLUDED.impact_title,
                 impact_main_number = EXCLUDED.impact_main_number,
                 impact_main_text = EXCLUDED.impact_main_text,
                 show_certification_support = EXCLUDED.show_certification_support,
                 certification_title = EXCLUDED.certification_title,
                 certification_subtitle = EXCLUDED.certification_subtitle,
                 certification_description = EXCLUDED.certification_description,
                 certification_icon = EXCLUDED.certification_icon,
                 certification_color = EXCLUDED.certification_color,
                 support_title = EXCLUDED.support_title,
                 support_subtitle = EXCLUDED.support_subtitle,
                 support_description = EXCLUDED.support_description,
                 support_icon = EXCLUDED.support_icon,
                 support_color = EXCLUDED.support_color,
                 show_sustainable_pathways = EXCLUDED.show_sustainable_pathways,
                 pathways_title = EXCLUDED.pathways_title,
                 pathways_description = EXCLUDED.pathways_description,
                 highlights_title = EXCLUDED.highlights_title,
                 updated_at = NOW()
             RETURNING {DETAIL_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectDetail>(&query)
            .bind(card_id)
            .bind(&f.badge_text)
            .bind(&f.launch_date_badge)
            .bind(&f.duration_hours)
            .bind(f.student_count)
            .bind(&f.location)
            .bind(&f.hero_image)
            .bind(&f.target_audience)
            .bind(&f.detailed_content)
            .bind(f.show_partners)
            .bind(f.show_program_overview)
            .bind(&f.program_overview_title)
            .bind(&f.program_overview_content)
            .bind(&f.implementing_partner_name)
            .bind(&f.overview_partner_2)
            .bind(&f.overview_partner_3)
            .bind(&f.program_objective)
            .bind(&f.learning_approach_title)
            .bind(&f.learning_approach_main)
            .bind(&f.learning_approach_sub)
            .bind(&f.learning_approach_icon)
            .bind(f.show_program_components)
            .bind(&f.components_title)
            .bind(f.show_role_impact)
            .bind(&f.role_title)
            .bind(&f.role_description)
            .bind(&f.impact_title)
            .bind(&f.impact_main_number)
            .bind(&f.impact_main_text)
            .bind(f.show_certification_support)
            .bind(&f.certification_title)
            .bind(&f.certification_subtitle)
            .bind(&f.certification_description)
            .bind(&f.certification_icon)
            .bind(&f.certification_color)
            .bind(&f.support_title)
            .bind(&f.support_subtitle)
            .bind(&f.support_description)
            .bind(&f.support_icon)
            .bind(&f.support_color)
            .bind(f.show_sustainable_pathways)
            .bind(&f.pathways_title)
            .bind(&f.pathways_description)
            .bind(&f.highlights_title)
            .fetch_one(&mut **tx)
            .await
    }

    async fn write_partners(
        tx: &mut Transaction<'_, Postgres>,
        detail_id: DbId,
        partners: &[PartnerInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_partners WHERE detail_id = $1")
            .bind(detail_id)
            .execute(&mut **tx)
            .await?;
        for (i, p) in partners.iter().take(3).enumerate() {
            sqlx::query(
                "INSERT INTO project_partners (detail_id, slot, name, partner_type, icon, color)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(detail_id)
            .bind(i as i32 + 1)
            .bind(&p.name)
            .bind(&p.partner_type)
            .bind(&p.icon)
            .bind(&p.color)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn write_components(
        tx: &mut Transaction<'_, Postgres>,
        detail_id: DbId,
        components: &[ComponentInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_components WHERE detail_id = $1")
            .bind(detail_id)
            .execute(&mut **tx)
            .await?;
        for (i, c) in components.iter().take(3).enumerate() {
            sqlx::query(
                "INSERT INTO project_components (detail_id, slot, title, subtitle, icon, color,
                                                 items)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(detail_id)
            .bind(i as i32 + 1)
            .bind(&c.title)
            .bind(&c.subtitle)
            .bind(&c.icon)
            .bind(&c.color)
            .bind(&c.items)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn write_role_items(
        tx: &mut Transaction<'_, Postgres>,
        detail_id: DbId,
        items: &[RoleItemInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_role_items WHERE detail_id = $1")
            .bind(detail_id)
            .execute(&mut **tx)
            .await?;
        for (i, item) in items.iter().take(4).enumerate() {
            sqlx::query(
                "INSERT INTO project_role_items (detail_id, slot, title, subtitle, icon, color)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(detail_id)
            .bind(i as i32 + 1)
            .bind(&item.title)
            .bind(&item.subtitle)
            .bind(&item.icon)
            .bind(&item.color)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn write_impact_metrics(
        tx: &mut Transaction<'_, Postgres>,
        detail_id: DbId,
        metrics: &[ImpactMetricInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_impact_metrics WHERE detail_id = $1")
            .bind(detail_id)
            .execute(&mut **tx)
            .await?;
        for (i, m) in metrics.iter().take(2).enumerate() {
            sqlx::query(
                "INSERT INTO project_impact_metrics (detail_id, slot, number, label)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(detail_id)
            .bind(i as i32 + 1)
            .bind(&m.number)
            .bind(&m.label)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn write_outcomes(
        tx: &mut Transaction<'_, Postgres>,
        detail_id: DbId,
        outcomes: &[OutcomeInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_outcomes WHERE detail_id = $1")
            .bind(detail_id)
            .execute(&mut **tx)
            .await?;
        for (i, o) in outcomes.iter().take(3).enumerate() {
            sqlx::query(
                "INSERT INTO project_outcomes (detail_id, slot, label, value, color)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(detail_id)
            .bind(i as i32 + 1)
            .bind(&o.label)
            .bind(o.value.clamp(0, 100))
            .bind(&o.color)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn write_features(
        tx: &mut Transaction<'_, Postgres>,
        detail_id: DbId,
        kind: &str,
        features: &[FeatureItemInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_feature_items WHERE detail_id = $1 AND kind = $2")
            .bind(detail_id)
            .bind(kind)
            .execute(&mut **tx)
            .await?;
        for (i, f) in features.iter().take(4).enumerate() {
            sqlx::query(
                "INSERT INTO project_feature_items (detail_id, kind, slot, text, icon, color)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(detail_id)
            .bind(kind)
            .bind(i as i32 + 1)
            .bind(&f.text)
            .bind(&f.icon)
            .bind(&f.color)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn write_partner_badges(
        tx: &mut Transaction<'_, Postgres>,
        detail_id: DbId,
        badges: &[PartnerBadgeInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_partner_badges WHERE detail_id = $1")
            .bind(detail_id)
            .execute(&mut **tx)
            .await?;
        for (i, b) in badges.iter().take(3).enumerate() {
            sqlx::query(
                "INSERT INTO project_partner_badges (detail_id, slot, name, icon, color)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(detail_id)
            .bind(i as i32 + 1)
            .bind(&b.name)
            .bind(&b.icon)
            .bind(&b.color)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn write_highlights(
        tx: &mut Transaction<'_, Postgres>,
        detail_id: DbId,
        highlights: &[HighlightInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_highlights WHERE detail_id = $1")
            .bind(detail_id)
            .execute(&mut **tx)
            .await?;
        for (i, h) in highlights.iter().take(3).enumerate() {
            sqlx::query(
                "INSERT INTO project_highlights (detail_id, slot, text, color)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(detail_id)
            .bind(i as i32 + 1)
            .bind(&h.text)
            .bind(&h.color)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    pub async fn find_by_card(
        pool: &PgPool,
        card_id: DbId,
    ) -> Result<Option<ProjectDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} FROM project_details WHERE card_id = $1");
        sqlx::query_as::<_, ProjectDetail>(&query)
            .bind(card_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete_for_card(pool: &PgPool, card_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_details WHERE card_id = $1")
            .bind(card_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load the detail page and all slot groups for a card, if the card
    /// has one.
    pub async fn view_for_card(
        pool: &PgPool,
        card_id: DbId,
    ) -> Result<Option<ProjectDetailView>, sqlx::Error> {
        let Some(detail) = Self::find_by_card(pool, card_id).await? else {
            return Ok(None);
        };

        let partners = sqlx::query_as::<_, ProjectPartner>(
            "SELECT id, detail_id, slot, name, partner_type, icon, color
             FROM project_partners WHERE detail_id = $1 ORDER BY slot ASC",
        )
        .bind(detail.id)
        .fetch_all(pool)
        .await?;

        let components = sqlx::query_as::<_, ProjectComponent>(
            "SELECT id, detail_id, slot, title, subtitle, icon, color, items
             FROM project_components WHERE detail_id = $1 ORDER BY slot ASC",
        )
        .bind(detail.id)
        .fetch_all(pool)
        .await?;

        let role_items = sqlx::query_as::<_, ProjectRoleItem>(
            "SELECT id, detail_id, slot, title, subtitle, icon, color
             FROM project_role_items WHERE detail_id = $1 ORDER BY slot ASC",
        )
        .bind(detail.id)
        .fetch_all(pool)
        .await?;

        let impact_metrics = sqlx::query_as::<_, ProjectImpactMetric>(
            "SELECT id, detail_id, slot, number, label
             FROM project_impact_metrics WHERE detail_id = $1 ORDER BY slot ASC",
        )
        .bind(detail.id)
        .fetch_all(pool)
        .await?;

        let outcomes = sqlx::query_as::<_, ProjectOutcome>(
            "SELECT id, detail_id, slot, label, value, color
             FROM project_outcomes WHERE detail_id = $1 ORDER BY slot ASC",
        )
        .bind(detail.id)
        .fetch_all(pool)
        .await?;

        let certification_features = sqlx::query_as::<_, ProjectFeatureItem>(
            "SELECT id, detail_id, kind, slot, text, icon, color
             FROM project_feature_items
             WHERE detail_id = $1 AND kind = 'certification' ORDER BY slot ASC",
        )
        .bind(detail.id)
        .fetch_all(pool)
        .await?;

        let support_features = sqlx::query_as::<_, ProjectFeatureItem>(
            "SELECT id, detail_id, kind, slot, text, icon, color
             FROM project_feature_items
             WHERE detail_id = $1 AND kind = 'support' ORDER BY slot ASC",
        )
        .bind(detail.id)
        .fetch_all(pool)
        .await?;

        let partner_badges = sqlx::query_as::<_, ProjectPartnerBadge>(
            "SELECT id, detail_id, slot, name, icon, color
             FROM project_partner_badges WHERE detail_id = $1 ORDER BY slot ASC",
        )
        .bind(detail.id)
        .fetch_all(pool)
        .await?;

        let highlights = sqlx::query_as::<_, ProjectHighlight>(
            "SELECT id, detail_id, slot, text, color
             FROM project_highlights WHERE detail_id = $1 ORDER BY slot ASC",
        )
        .bind(detail.id)
        .fetch_all(pool)
        .await?;

        let student_count_display = student_count_display(detail.fields.student_count);

        Ok(Some(ProjectDetailView {
            detail,
            student_count_display,
            partners,
            components,
            role_items,
            impact_metrics,
            outcomes,
            certification_features,
            support_features,
            partner_badges,
            highlights,
        }))
    }
}
