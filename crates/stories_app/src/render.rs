use stories_core::AppViewModel;

/// Print the current view to the terminal.
pub fn render(view: &AppViewModel, total_comments: u64) {
    println!();
    println!(
        "My Hacker Stories with {} comments (search: {:?})",
        total_comments, view.submitted_term
    );

    if view.is_error {
        println!("Something went wrong ...");
    }

    if view.is_loading {
        println!("Loading ...");
    } else {
        for story in &view.stories {
            println!(
                "  [{}] {} ({}) by {} - {} comments, {} points",
                story.id, story.title, story.url, story.author, story.comment_count, story.points
            );
        }
        if view.stories.is_empty() && !view.is_error {
            println!("  (no results)");
        }
    }

    println!("Type a term to search, 'rm <id>' to dismiss, 'quit' to exit.");
}
