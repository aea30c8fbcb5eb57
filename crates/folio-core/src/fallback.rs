//! The fixed fallback collection served when the remote store is
//! unreachable or empty. Non-empty and order-stable across calls, already
//! ordered newest-first, so the listing page is never blank during initial
//! setup or demo conditions.

use chrono::{DateTime, TimeZone, Utc};
use uuid::{Uuid, uuid};

use crate::domain::BlogPost;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn demo(
    id: Uuid,
    title: &str,
    slug: &str,
    excerpt: &str,
    content: &str,
    image_url: &str,
    published_at: DateTime<Utc>,
    tags: &[&str],
) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        content: content.to_string(),
        excerpt: excerpt.to_string(),
        image_url: Some(image_url.to_string()),
        published_at,
        created_at: published_at,
        updated_at: published_at,
        slug: slug.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The demo posts, newest first.
pub fn fallback_posts() -> Vec<BlogPost> {
    vec![
        demo(
            uuid!("7a1c2f34-9b1d-4e5a-8c6f-0d1e2a3b4c5d"),
            "Testing Strategies for Modern Frontend Applications",
            "testing-strategies-for-modern-frontend-applications",
            "Exploring testing strategies for modern frontend applications: key \
             concepts, best practices, and practical implementation strategies.",
            "# Testing Strategies for Modern Frontend Applications\n\n\
             ## Why This Matters\n\n\
             A test suite is only useful when it fails for the right reasons. \
             Most frontend suites fail for the wrong ones: brittle selectors, \
             mocked-out behavior, timing assumptions.\n\n\
             ## The Testing Trophy\n\n\
             > Write tests. Not too many. Mostly integration.\n\n\
             Unit tests cover pure logic, integration tests cover component \
             wiring, and a thin end-to-end layer covers the critical paths.\n\n\
             ```javascript\n\
             test('filters posts by tag', () => {\n\
               render(<BlogListing posts={posts} />)\n\
               fireEvent.click(screen.getByText('css'))\n\
               expect(screen.queryByText('B')).toBeNull()\n\
             })\n\
             ```\n\n\
             ### Common Pitfalls\n\n\
             Testing implementation details instead of behavior is the fastest \
             way to a suite nobody trusts.",
            "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=800&h=400&fit=crop",
            at(2025, 8, 15, 9, 12),
            &["Frontend", "Web Development", "JavaScript", "Testing"],
        ),
        demo(
            uuid!("3f8e9a12-5c4b-4d7e-9a1b-2c3d4e5f6a7b"),
            "Advanced React Patterns and Performance Optimization",
            "advanced-react-patterns-and-performance-optimization",
            "Compound components, render optimization, and the hooks that \
             actually move the performance needle.",
            "# Advanced React Patterns and Performance Optimization\n\n\
             ## Key Concepts\n\n\
             ### Compound Components\n\n\
             Expose a family of components that share implicit state instead \
             of one component with twenty props.\n\n\
             ### Memoization, Carefully\n\n\
             ```javascript\n\
             const visible = useMemo(\n\
               () => filterAndSort(posts, query, tags, sort),\n\
               [posts, query, tags, sort]\n\
             )\n\
             ```\n\n\
             > Measure first. A memo around a cheap computation is pure \
             overhead.\n\n\
             ## Looking Forward\n\n\
             Concurrent rendering changes the rules again; patterns that lean \
             on render purity survive, the rest do not.",
            "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=400&fit=crop",
            at(2025, 8, 14, 9, 37),
            &["Frontend", "Web Development", "JavaScript", "React", "Hooks"],
        ),
        demo(
            uuid!("b2d4f6a8-1e3c-4a5b-8d7e-9f0a1b2c3d4e"),
            "Mastering CSS Grid and Flexbox for Modern Layouts",
            "mastering-css-grid-flexbox-modern-layouts",
            "When to reach for Grid, when Flexbox is enough, and how the two \
             compose in real page layouts.",
            "# Mastering CSS Grid and Flexbox for Modern Layouts\n\n\
             ## Two Tools, Two Jobs\n\n\
             Grid is for two-dimensional page structure; Flexbox is for \
             one-dimensional content flow. Most confusion comes from using \
             either for the other's job.\n\n\
             ```css\n\
             .blog-grid {\n\
               display: grid;\n\
               grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));\n\
               gap: 2rem;\n\
             }\n\
             ```\n\n\
             ### Auto-placement\n\n\
             `auto-fill` with `minmax` gives responsive card grids with zero \
             media queries.\n\n\
             > The best layout code is the layout code you delete.",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&h=400&fit=crop",
            at(2024, 1, 5, 9, 15),
            &["CSS", "Layout", "Responsive Design", "Grid", "Flexbox"],
        ),
        demo(
            uuid!("c5e7a9b1-3d2f-4c6a-9e8b-0a1c2d3e4f5a"),
            "Performance Optimization Techniques for Modern Web Apps",
            "performance-optimization-techniques-modern-web-apps",
            "Core Web Vitals, bundle discipline, and the handful of techniques \
             that account for most real-world wins.",
            "# Performance Optimization Techniques for Modern Web Apps\n\n\
             ## Measure Before You Optimize\n\n\
             Lab numbers lie; field data from real sessions is the only \
             scoreboard that counts.\n\n\
             ## The Big Three\n\n\
             ### Ship Less JavaScript\n\n\
             Every kilobyte is parsed, compiled and executed on a phone from \
             2019.\n\n\
             ### Load Images Lazily\n\n\
             ```javascript\n\
             <img loading=\"lazy\" src={post.image_url} alt={post.title} />\n\
             ```\n\n\
             ### Cache Aggressively\n\n\
             > The fastest request is the one you never make.",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=400&fit=crop",
            at(2023, 12, 28, 16, 45),
            &["Performance", "Web Vitals", "Optimization", "JavaScript"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_non_empty_and_newest_first() {
        let posts = fallback_posts();
        assert!(!posts.is_empty());
        for pair in posts.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
    }

    #[test]
    fn fallback_is_order_stable_across_calls() {
        let a: Vec<_> = fallback_posts().iter().map(|p| p.id).collect();
        let b: Vec<_> = fallback_posts().iter().map(|p| p.id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn fallback_slugs_are_well_formed_and_unique() {
        let posts = fallback_posts();
        for post in &posts {
            // Already in canonical slug form.
            assert_eq!(crate::domain::create_slug(&post.slug), post.slug);
        }
        let mut slugs: Vec<_> = posts.iter().map(|p| p.slug.clone()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), posts.len());
    }
}
