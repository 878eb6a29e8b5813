//! Definitions shipped with the editor.

use crate::{BlockCategory, BlockDefinition, BlockKind};
use serde_json::json;

pub fn builtin_categories() -> Vec<BlockCategory> {
    vec![
        BlockCategory::new("all", "All Blocks"),
        BlockCategory::new("content", "Content"),
        BlockCategory::new("media", "Media"),
        BlockCategory::new("layout", "Layout"),
        BlockCategory::new("business", "Business"),
        BlockCategory::new("forms", "Forms"),
        BlockCategory::new("ecommerce", "E-commerce"),
    ]
}

const SECTION_KEYS: &[&str] = &["buttonText", "buttonLink", "textColor", "backgroundColor"];

pub fn builtin_definitions() -> Vec<BlockDefinition> {
    vec![
        // Content
        BlockDefinition::new(
            "hero-section",
            BlockKind::Hero,
            "content",
            "Hero Section",
            "Eye-catching header with title, subtitle, and call-to-action",
            json!({
                "title": "Welcome to Our Business",
                "subtitle": "We provide exceptional services for your needs",
                "buttonText": "Get Started",
                "backgroundImage": "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=1920&h=600&fit=crop",
                "overlayOpacity": 0.5,
                "textAlign": "center"
            }),
        )
        .popular()
        .with_optional_props(&["buttonLink", "alignment", "textColor", "backgroundColor"])
        .with_preview("/api/block-previews/hero-section.jpg"),
        BlockDefinition::new(
            "text-block",
            BlockKind::Text,
            "content",
            "Text Block",
            "Rich text editor for paragraphs, headings, and formatted content",
            json!({
                "content": "<h2>About Our Company</h2><p>We are dedicated to providing exceptional service and value to our customers.</p>",
                "textAlign": "left",
                "maxWidth": "100%"
            }),
        )
        .popular()
        .with_optional_props(&["title", "subtitle", "text", "alignment", "buttonText", "buttonLink", "textColor"])
        .with_preview("/api/block-previews/text-block.jpg"),
        BlockDefinition::new(
            "feature-grid",
            BlockKind::Features,
            "content",
            "Feature Grid",
            "Showcase your services or features in a grid layout",
            json!({
                "features": [
                    { "icon": "star", "title": "Quality Service", "description": "We deliver top-notch quality in everything we do" },
                    { "icon": "users", "title": "Expert Team", "description": "Our experienced professionals are here to help" },
                    { "icon": "clock", "title": "Fast Delivery", "description": "Quick turnaround times without compromising quality" }
                ],
                "columns": 3,
                "showIcons": true
            }),
        )
        .popular()
        .with_preview("/api/block-previews/feature-grid.jpg"),
        BlockDefinition::new(
            "call-to-action",
            BlockKind::Cta,
            "content",
            "Call to Action",
            "Focused banner prompting visitors to take the next step",
            json!({
                "title": "Ready to Get Started?",
                "subtitle": "Join thousands of satisfied customers",
                "buttonText": "Start Now",
                "buttonLink": "#"
            }),
        )
        .with_optional_props(&["text", "alignment", "textColor", "backgroundColor"]),
        // Media
        BlockDefinition::new(
            "image-gallery",
            BlockKind::Gallery,
            "media",
            "Image Gallery",
            "Display multiple images in an attractive grid or carousel",
            json!({
                "images": [
                    { "src": "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=400&h=300&fit=crop", "alt": "Gallery Image 1" },
                    { "src": "https://images.unsplash.com/photo-1560472355-b3400c4f3b26?w=400&h=300&fit=crop", "alt": "Gallery Image 2" },
                    { "src": "https://images.unsplash.com/photo-1560472356-c4c1e9c7d67a?w=400&h=300&fit=crop", "alt": "Gallery Image 3" }
                ],
                "layout": "grid",
                "columns": 3,
                "showCaptions": false
            }),
        )
        .with_optional_props(&["title", "subtitle"])
        .with_preview("/api/block-previews/image-gallery.jpg"),
        BlockDefinition::new(
            "video-embed",
            BlockKind::Video,
            "media",
            "Video Player",
            "Embed videos from YouTube, Vimeo, or upload your own",
            json!({
                "videoUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                "autoplay": false,
                "controls": true,
                "aspectRatio": "16:9"
            }),
        )
        .with_preview("/api/block-previews/video-embed.jpg"),
        BlockDefinition::new(
            "single-image",
            BlockKind::Image,
            "media",
            "Image",
            "A single image with an optional caption",
            json!({
                "imageUrl": "https://via.placeholder.com/600x400",
                "imageAlt": "Placeholder image",
                "title": "Image Block"
            }),
        ),
        // Layout
        BlockDefinition::new(
            "two-column",
            BlockKind::Columns,
            "layout",
            "Two Columns",
            "Split content into two side-by-side columns",
            json!({
                "columns": 2,
                "gap": "medium",
                "verticalAlign": "top",
                "leftContent": "<h3>Left Column</h3><p>Content for the left side.</p>",
                "rightContent": "<h3>Right Column</h3><p>Content for the right side.</p>"
            }),
        )
        .with_preview("/api/block-previews/two-column.jpg"),
        BlockDefinition::new(
            "spacer",
            BlockKind::Spacer,
            "layout",
            "Spacer",
            "Add vertical spacing between sections",
            json!({
                "height": "medium",
                "backgroundColor": "transparent"
            }),
        )
        .with_preview("/api/block-previews/spacer.jpg"),
        // Business
        BlockDefinition::new(
            "testimonials",
            BlockKind::Testimonials,
            "business",
            "Testimonials",
            "Display customer reviews and testimonials",
            json!({
                "testimonials": [
                    {
                        "name": "John Smith",
                        "company": "ABC Corp",
                        "content": "Excellent service and professional team. Highly recommended!",
                        "rating": 5,
                        "avatar": "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face"
                    },
                    {
                        "name": "Sarah Johnson",
                        "company": "XYZ Inc",
                        "content": "Outstanding quality and attention to detail. Very satisfied with the results.",
                        "rating": 5,
                        "avatar": "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face"
                    }
                ],
                "layout": "carousel",
                "showRatings": true,
                "showAvatars": true
            }),
        )
        .popular()
        .with_optional_props(&["title", "subtitle"])
        .with_preview("/api/block-previews/testimonials.jpg"),
        BlockDefinition::new(
            "team-members",
            BlockKind::Team,
            "business",
            "Team Members",
            "Showcase your team with photos and bios",
            json!({
                "members": [
                    {
                        "name": "Dr. Emily Chen",
                        "role": "Lead Specialist",
                        "bio": "Over 10 years of experience in the field",
                        "photo": "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=300&h=300&fit=crop&crop=face",
                        "social": { "linkedin": "#", "twitter": "#" }
                    },
                    {
                        "name": "Michael Rodriguez",
                        "role": "Senior Consultant",
                        "bio": "Expert in customer relations and project management",
                        "photo": "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=300&fit=crop&crop=face",
                        "social": { "linkedin": "#" }
                    }
                ],
                "layout": "grid",
                "showBios": true,
                "showSocial": true
            }),
        )
        .with_preview("/api/block-previews/team-members.jpg"),
        BlockDefinition::new(
            "business-hours",
            BlockKind::Hours,
            "business",
            "Business Hours",
            "Display your operating hours and contact information",
            json!({
                "hours": {
                    "monday": "9:00 AM - 6:00 PM",
                    "tuesday": "9:00 AM - 6:00 PM",
                    "wednesday": "9:00 AM - 6:00 PM",
                    "thursday": "9:00 AM - 6:00 PM",
                    "friday": "9:00 AM - 6:00 PM",
                    "saturday": "10:00 AM - 4:00 PM",
                    "sunday": "Closed"
                },
                "timezone": "EST",
                "showCurrentStatus": true
            }),
        )
        .with_preview("/api/block-previews/business-hours.jpg"),
        BlockDefinition::new(
            "location-map",
            BlockKind::Map,
            "business",
            "Location Map",
            "Embed an interactive map showing your business location",
            json!({
                "address": "123 Business Street, City, State 12345",
                "latitude": 40.7128,
                "longitude": -74.0060,
                "zoom": 15,
                "showMarker": true,
                "height": 400
            }),
        )
        .with_preview("/api/block-previews/location-map.jpg"),
        BlockDefinition::new(
            "services-section",
            BlockKind::Services,
            "business",
            "Services",
            "Describe what you offer in a simple titled section",
            json!({
                "title": "Our Services",
                "subtitle": "What we offer",
                "text": "Professional services tailored to your needs",
                "alignment": "center"
            }),
        )
        .with_optional_props(SECTION_KEYS),
        // Forms
        BlockDefinition::new(
            "contact-form",
            BlockKind::Form,
            "forms",
            "Contact Form",
            "Let customers get in touch with a customizable contact form",
            json!({
                "fields": [
                    { "type": "text", "name": "name", "label": "Full Name", "required": true },
                    { "type": "email", "name": "email", "label": "Email Address", "required": true },
                    { "type": "tel", "name": "phone", "label": "Phone Number", "required": false },
                    { "type": "textarea", "name": "message", "label": "Message", "required": true, "rows": 4 }
                ],
                "submitText": "Send Message",
                "successMessage": "Thank you for your message! We'll get back to you soon.",
                "layout": "stacked"
            }),
        )
        .popular()
        .with_optional_props(&["title"])
        .with_preview("/api/block-previews/contact-form.jpg"),
        BlockDefinition::new(
            "contact-section",
            BlockKind::Contact,
            "forms",
            "Contact Section",
            "Invite visitors to reach out with a short call to contact you",
            json!({
                "title": "Get In Touch",
                "subtitle": "Ready to start your project?",
                "text": "Contact us today for a free consultation",
                "alignment": "center"
            }),
        )
        .with_optional_props(SECTION_KEYS),
        BlockDefinition::new(
            "newsletter-signup",
            BlockKind::Newsletter,
            "forms",
            "Newsletter Signup",
            "Collect email addresses for your newsletter or updates",
            json!({
                "title": "Stay Updated",
                "description": "Subscribe to our newsletter for the latest updates and offers",
                "placeholder": "Enter your email address",
                "buttonText": "Subscribe",
                "layout": "inline"
            }),
        )
        .with_preview("/api/block-previews/newsletter-signup.jpg"),
        // E-commerce
        BlockDefinition::new(
            "product-showcase",
            BlockKind::Products,
            "ecommerce",
            "Product Showcase",
            "Display your products with images, prices, and descriptions",
            json!({
                "products": [
                    {
                        "id": 1,
                        "name": "Premium Service Package",
                        "price": "$99.00",
                        "image": "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=300&h=300&fit=crop",
                        "description": "Our most popular service package with everything you need"
                    },
                    {
                        "id": 2,
                        "name": "Standard Service",
                        "price": "$49.00",
                        "image": "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=300&h=300&fit=crop",
                        "description": "Great value service option for basic needs"
                    }
                ],
                "layout": "grid",
                "showPrices": true,
                "showDescriptions": true
            }),
        )
        .premium()
        .with_preview("/api/block-previews/product-showcase.jpg"),
    ]
}
