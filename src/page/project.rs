//! Project detail page.

use super::{Page, ProjectRender};
use crate::core::{Gallery, PreferenceStore, Project};
use crate::dom::{ids, Document};

const NOT_FOUND_HTML: &str = r#"<div class="container"><h1>Project not found</h1></div>"#;

impl<D: Document, S: PreferenceStore> Page<D, S> {
    /// Look up `?id=` and render the header fields and gallery grid.
    ///
    /// Each target is written only if present; a template without the
    /// header block still gets its title, gallery and lightbox.
    pub(crate) fn render_project_page(&mut self) -> ProjectRender {
        let id = self.location.project_id();
        let project = match (&self.content, &id) {
            (Some(content), Some(id)) => content.find_project(id).cloned(),
            _ => None,
        };
        let Some(project) = project else {
            log::info!("project not found: {:?}", id);
            if let Some(header) = self.doc.query(ids::PROJECT_HEADER_SELECTOR) {
                self.doc.set_html(&header, NOT_FOUND_HTML);
            }
            return ProjectRender::NotFound;
        };

        let title = format!("{} | {}", project.title_or_empty(), self.site_name());
        self.doc.set_title(&title);
        self.doc.set_text_by_id(ids::PROJECT_CATEGORY, &project.category);
        self.doc.set_text_by_id(ids::PROJECT_TITLE, project.title_or_empty());
        self.doc.set_text_by_id(
            ids::PROJECT_DESC,
            project.description.as_deref().unwrap_or(""),
        );

        let images = project.gallery_images();
        self.render_gallery_cells(&project, &images);
        self.gallery = Some(Gallery::new(images));
        self.bind_lightbox();
        ProjectRender::Rendered
    }

    fn render_gallery_cells(&mut self, project: &Project, images: &[String]) {
        let Some(grid) = self.doc.by_id(ids::PROJECT_GALLERY_GRID) else {
            return;
        };
        self.doc.clear(&grid);

        for (index, src) in images.iter().enumerate() {
            let (Some(cell), Some(img)) = (self.doc.create("div"), self.doc.create("img")) else {
                continue;
            };
            self.doc.set_attr(
                &cell,
                "class",
                &format!("{} fade-in-up", ids::GALLERY_CELL_CLASS),
            );
            self.doc.set_attr(&cell, ids::INDEX_ATTR, &index.to_string());
            self.doc
                .set_style(&cell, "animation-delay", &self.config.stagger_delay(index));

            self.doc.set_attr(&img, "src", src);
            let alt = format!("{} image {}", project.title_or_empty(), index + 1);
            self.doc.set_attr(&img, "alt", &alt);
            self.doc.append(&cell, &img);
            self.doc.append(&grid, &cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::core::{ContentSchema, Location, MemoryPreferenceStore, SiteConfig};
    use crate::dom::{ids, Document, MemoryDocument};
    use crate::page::{Page, ProjectRender};

    fn content() -> ContentSchema {
        ContentSchema::from_value(json!({
            "profile": {"name": "Wicaksono"},
            "portfolio": [
                {"id": "p1", "title": "Logo", "category": "branding", "image": "cover.jpg",
                 "description": "A mark."},
                {"id": "p2", "title": "Book", "category": "print",
                 "gallery": ["1.jpg", "2.jpg", "3.jpg"]}
            ],
            "moodboard_galleries": [
                {"id": "m1", "title": "Autumn", "category": "mood", "gallery": ["a.jpg", "b.jpg"]}
            ]
        }))
        .unwrap()
    }

    fn open(url: &str) -> Page<MemoryDocument, MemoryPreferenceStore> {
        let mut page = Page::new(
            MemoryDocument::project_page(),
            MemoryPreferenceStore::new(),
            SiteConfig::default(),
            Location::parse(url),
        );
        page.load(content());
        page
    }

    fn cells(page: &Page<MemoryDocument, MemoryPreferenceStore>) -> Vec<crate::dom::NodeId> {
        let doc = page.doc();
        doc.children(&doc.by_id(ids::PROJECT_GALLERY_GRID).unwrap())
    }

    #[test]
    fn renders_header_and_title() {
        let page = open("/project.html?id=p1");
        assert_eq!(page.project_render(), Some(ProjectRender::Rendered));

        let doc = page.doc();
        assert_eq!(doc.title(), "Logo | Wicaksono");
        assert_eq!(doc.text_of(ids::PROJECT_CATEGORY).as_deref(), Some("branding"));
        assert_eq!(doc.text_of(ids::PROJECT_DESC).as_deref(), Some("A mark."));
    }

    #[test]
    fn cover_image_becomes_single_cell() {
        let page = open("/project.html?id=p1");
        let cells = cells(&page);
        assert_eq!(cells.len(), 1);

        let doc = page.doc();
        assert_eq!(doc.attr(&cells[0], ids::INDEX_ATTR).as_deref(), Some("0"));
        let img = doc.children(&cells[0])[0];
        assert_eq!(doc.attr(&img, "src").as_deref(), Some("cover.jpg"));
        assert_eq!(doc.attr(&img, "alt").as_deref(), Some("Logo image 1"));
        assert_eq!(page.gallery().map(|g| g.len()), Some(1));
    }

    #[test]
    fn gallery_cells_are_indexed_and_staggered() {
        let page = open("/project.html?id=p2");
        let cells = cells(&page);
        assert_eq!(cells.len(), 3);

        let doc = page.doc();
        assert!(doc.has_class(&cells[2], ids::GALLERY_CELL_CLASS));
        assert_eq!(doc.attr(&cells[2], ids::INDEX_ATTR).as_deref(), Some("2"));
        assert_eq!(doc.style(cells[1], "animation-delay"), Some("100ms"));
    }

    #[test]
    fn moodboard_projects_are_found() {
        let page = open("/project.html?id=m1");
        assert_eq!(page.doc().text_of(ids::PROJECT_TITLE).as_deref(), Some("Autumn"));
        assert_eq!(cells(&page).len(), 2);
    }

    #[test]
    fn unknown_id_shows_not_found() {
        let page = open("/project.html?id=missing");
        assert_eq!(page.project_render(), Some(ProjectRender::NotFound));
        assert!(page.gallery().is_none());

        let doc = page.doc();
        let header = doc.query(ids::PROJECT_HEADER_SELECTOR).unwrap();
        assert_eq!(
            doc.inner_html(header),
            Some(r#"<div class="container"><h1>Project not found</h1></div>"#)
        );
        assert!(doc.by_id(ids::PROJECT_TITLE).is_none());
    }

    #[test]
    fn missing_id_param_shows_not_found() {
        let page = open("/project.html");
        assert_eq!(page.project_render(), Some(ProjectRender::NotFound));
    }

    #[test]
    fn template_without_header_still_renders_gallery() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        doc.add(root, "h1", Some(ids::PROJECT_TITLE), &[]);
        doc.add(root, "div", Some(ids::PROJECT_GALLERY_GRID), &[]);
        doc.add(root, "div", Some(ids::LIGHTBOX), &[]);

        let mut page = Page::new(
            doc,
            MemoryPreferenceStore::new(),
            SiteConfig::default(),
            Location::parse("/project.html?id=p2"),
        );
        page.load(content());

        assert_eq!(page.project_render(), Some(ProjectRender::Rendered));
        assert_eq!(page.doc().title(), "Book | Wicaksono");
        assert_eq!(page.doc().text_of(ids::PROJECT_TITLE).as_deref(), Some("Book"));
        assert_eq!(cells(&page).len(), 3);
        assert_eq!(page.gallery().map(|g| g.len()), Some(3));
        assert!(page.event_context().lightbox_bound);
    }

    #[test]
    fn not_found_without_header_is_a_no_op() {
        let mut page = Page::new(
            MemoryDocument::new(),
            MemoryPreferenceStore::new(),
            SiteConfig::default(),
            Location::parse("/project.html?id=missing"),
        );
        page.load(content());
        assert_eq!(page.project_render(), Some(ProjectRender::NotFound));
        assert!(!page.doc().to_html().contains("Project not found"));
    }
}
