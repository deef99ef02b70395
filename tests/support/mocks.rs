// tests/support/mocks.rs
use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use showroom_cms::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{
        html::{HtmlSanitizer, SanitizeError},
        storage::{ObjectStorage, UploadTicket},
        time::Clock,
    },
};
use showroom_cms::domain::{
    about::{AboutPage, AboutPageRepository},
    article::{
        Article, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleSlug, ArticleUpdate,
        ArticleWriteRepository, NewArticle,
    },
    car_model::{
        CarModel, CarModelId, CarModelListFilter, CarModelReadRepository, CarModelSlug,
        CarModelUpdate, CarModelWriteRepository, NewCarModel,
    },
    contact::{
        ContactRepository, ContactStatus, ContactSubmission, ContactSubmissionId,
        NewContactSubmission,
    },
    errors::{DomainError, DomainResult},
    homepage::{HomepageConfig, HomepageRepository},
    pagination::PageRequest,
};

/// Every test sees the same "now".
pub static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *FIXED_NOW
    }
}

fn page_of<T: Clone>(items: &[T], page: PageRequest) -> (Vec<T>, u64) {
    let total = items.len() as u64;
    let offset = usize::try_from(page.offset()).unwrap();
    let limit = usize::try_from(page.limit()).unwrap();
    (items.iter().skip(offset).take(limit).cloned().collect(), total)
}

fn matches_search(haystack: &str, needle: Option<&String>) -> bool {
    needle.is_none_or(|n| haystack.to_lowercase().contains(&n.to_lowercase()))
}

/* -------------------------------- Articles -------------------------------- */

#[derive(Default)]
pub struct InMemoryArticles {
    rows: Mutex<Vec<Article>>,
    next_id: Mutex<i64>,
}

impl InMemoryArticles {
    pub fn seed(&self, article: Article) {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(article.id.0);
        self.rows.lock().unwrap().push(article);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.rows.lock().unwrap().iter().find(|a| a.id.0 == id).cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, new: NewArticle) -> DomainResult<Option<Article>> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|a| a.slug == new.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let article = Article {
            id: ArticleId::new(*next_id)?,
            title: new.title,
            slug: new.slug,
            content: new.content,
            excerpt: new.excerpt,
            category: new.category,
            featured_image_url: new.featured_image_url,
            featured_image_alt: new.featured_image_alt,
            youtube_url: new.youtube_url,
            published: new.published,
            published_at: new.published_at,
            meta_description: new.meta_description,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        rows.push(article.clone());
        Ok(Some(article))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(slug) = &update.slug {
            if rows.iter().any(|a| a.slug == *slug && a.id != update.id) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        let Some(row) = rows.iter_mut().find(|a| a.id == update.id) else {
            return Ok(None);
        };
        *row = update.apply_to(row.clone());
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        Ok(rows.len() != before)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(id.0))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self.rows.lock().unwrap().iter().find(|a| a.slug == *slug).cloned())
    }

    async fn list_page(
        &self,
        filter: &ArticleListFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let mut matching: Vec<Article> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| !filter.published_only || a.published)
            .filter(|a| filter.category.as_deref().is_none_or(|c| a.category.as_str() == c))
            .filter(|a| matches_search(a.title.as_str(), filter.search.as_ref()))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(page_of(&matching, page))
    }
}

/* -------------------------------- Car models -------------------------------- */

#[derive(Default)]
pub struct InMemoryCarModels {
    rows: Mutex<Vec<CarModel>>,
    next_id: Mutex<i64>,
}

impl InMemoryCarModels {
    pub fn seed(&self, model: CarModel) {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(model.id.0);
        self.rows.lock().unwrap().push(model);
    }

    pub fn get(&self, id: i64) -> Option<CarModel> {
        self.rows.lock().unwrap().iter().find(|m| m.id.0 == id).cloned()
    }
}

#[async_trait]
impl CarModelWriteRepository for InMemoryCarModels {
    async fn insert(&self, new: NewCarModel) -> DomainResult<Option<CarModel>> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|m| m.slug == new.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let model = CarModel {
            id: CarModelId::new(*next_id)?,
            name: new.name,
            slug: new.slug,
            category: new.category,
            tagline: new.tagline,
            description: new.description,
            starting_price: new.starting_price,
            main_image_url: new.main_image_url,
            brochure_url: new.brochure_url,
            features: new.features,
            colors: new.colors,
            gallery: new.gallery,
            published: new.published,
            display_order: new.display_order,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        rows.push(model.clone());
        Ok(Some(model))
    }

    async fn update(&self, update: CarModelUpdate) -> DomainResult<Option<CarModel>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|m| m.id == update.id) else {
            return Ok(None);
        };
        *row = update.apply_to(row.clone());
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: CarModelId) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        Ok(rows.len() != before)
    }
}

#[async_trait]
impl CarModelReadRepository for InMemoryCarModels {
    async fn find_by_id(&self, id: CarModelId) -> DomainResult<Option<CarModel>> {
        Ok(self.get(id.0))
    }

    async fn find_by_slug(&self, slug: &CarModelSlug) -> DomainResult<Option<CarModel>> {
        Ok(self.rows.lock().unwrap().iter().find(|m| m.slug == *slug).cloned())
    }

    async fn list_page(
        &self,
        filter: &CarModelListFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<CarModel>, u64)> {
        let mut matching: Vec<CarModel> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|m| !filter.published_only || m.published)
            .filter(|m| filter.category.as_deref().is_none_or(|c| m.category.as_str() == c))
            .filter(|m| matches_search(m.name.as_str(), filter.search.as_ref()))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.name.as_str().cmp(b.name.as_str()))
        });
        Ok(page_of(&matching, page))
    }
}

/* -------------------------------- Singletons -------------------------------- */

#[derive(Default)]
pub struct InMemoryHomepage {
    config: Mutex<Option<HomepageConfig>>,
    next_section_id: Mutex<i64>,
}

impl InMemoryHomepage {
    pub fn current(&self) -> Option<HomepageConfig> {
        self.config.lock().unwrap().clone()
    }
}

#[async_trait]
impl HomepageRepository for InMemoryHomepage {
    async fn load(&self) -> DomainResult<Option<HomepageConfig>> {
        Ok(self.current())
    }

    async fn replace(&self, mut config: HomepageConfig) -> DomainResult<HomepageConfig> {
        let mut next_id = self.next_section_id.lock().unwrap();
        for section in &mut config.sections {
            *next_id += 1;
            section.id = Some(*next_id);
        }
        *self.config.lock().unwrap() = Some(config.clone());
        Ok(config)
    }
}

#[derive(Default)]
pub struct InMemoryAboutPage {
    page: Mutex<Option<AboutPage>>,
}

#[async_trait]
impl AboutPageRepository for InMemoryAboutPage {
    async fn load(&self) -> DomainResult<Option<AboutPage>> {
        Ok(self.page.lock().unwrap().clone())
    }

    async fn upsert(&self, page: AboutPage) -> DomainResult<AboutPage> {
        *self.page.lock().unwrap() = Some(page.clone());
        Ok(page)
    }
}

/* -------------------------------- Contact -------------------------------- */

#[derive(Default)]
pub struct InMemoryContacts {
    rows: Mutex<Vec<ContactSubmission>>,
}

impl InMemoryContacts {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContacts {
    async fn insert(&self, new: NewContactSubmission) -> DomainResult<ContactSubmission> {
        let mut rows = self.rows.lock().unwrap();
        let id = ContactSubmissionId::new(rows.len() as i64 + 1)?;
        let submission = ContactSubmission {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            car_model_interest: new.car_model_interest,
            message: new.message,
            status: ContactStatus::New,
            created_at: new.created_at,
            updated_at: new.created_at,
        };
        rows.push(submission.clone());
        Ok(submission)
    }

    async fn find_by_id(
        &self,
        id: ContactSubmissionId,
    ) -> DomainResult<Option<ContactSubmission>> {
        Ok(self.rows.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn list_page(
        &self,
        status: Option<ContactStatus>,
        page: PageRequest,
    ) -> DomainResult<(Vec<ContactSubmission>, u64)> {
        let mut matching: Vec<ContactSubmission> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| status.is_none_or(|wanted| s.status == wanted))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(page_of(&matching, page))
    }

    async fn update_status(
        &self,
        id: ContactSubmissionId,
        status: ContactStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Option<ContactSubmission>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        row.status = status;
        row.updated_at = updated_at;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: ContactSubmissionId) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        Ok(rows.len() != before)
    }
}

/* -------------------------------- Adapters -------------------------------- */

pub const CDN_BASE: &str = "https://cdn.test/";

/// Object storage fake that records deletions instead of performing them.
#[derive(Default)]
pub struct RecordingStorage {
    deleted: Mutex<Vec<String>>,
    fail_deletes: AtomicBool,
}

impl RecordingStorage {
    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ObjectStorage for RecordingStorage {
    async fn request_upload_url(
        &self,
        file_name: &str,
        _file_type: &str,
    ) -> ApplicationResult<UploadTicket> {
        let object_key = format!("uploads/2024/05/test-{file_name}");
        Ok(UploadTicket {
            presigned_url: format!("https://s3.test/bucket/{object_key}?X-Amz-Signature=abc"),
            public_url: format!("{CDN_BASE}{object_key}"),
            object_key,
        })
    }

    async fn delete_object(&self, public_url: &str) -> ApplicationResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("storage unavailable"));
        }
        self.deleted.lock().unwrap().push(public_url.to_string());
        Ok(())
    }

    fn is_managed(&self, public_url: &str) -> bool {
        public_url.starts_with(CDN_BASE)
    }
}

/// Sanitizer that always fails, for exercising the failure policy.
pub struct FailingSanitizer;

impl HtmlSanitizer for FailingSanitizer {
    fn sanitize(&self, _html: &str) -> Result<String, SanitizeError> {
        Err(SanitizeError("sanitizer crashed".into()))
    }
}
